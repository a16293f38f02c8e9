use crate::action::ActionType;
use rand::Rng;

/// Named operation mixes replayed against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadProfileType {
    /// Read-heavy mix approximating interactive board usage
    Full,
    AddOnly,
    FindOneOnly,
    FindAllOnly,
    UpdateOnly,
    /// Paired delete/add churn that keeps the store populated
    DeleteAdd,
}

impl LoadProfileType {
    pub const ALL: [LoadProfileType; 6] = [
        LoadProfileType::Full,
        LoadProfileType::AddOnly,
        LoadProfileType::FindOneOnly,
        LoadProfileType::FindAllOnly,
        LoadProfileType::UpdateOnly,
        LoadProfileType::DeleteAdd,
    ];
}

/// A weighted distribution over store operations.
///
/// Each draw picks an action with probability proportional to its weight,
/// by walking the cumulative sum.
pub struct LoadProfile {
    profile: Vec<(ActionType, u32)>,
    total: u32,
}

impl LoadProfile {
    pub fn new(profile: Vec<(ActionType, u32)>) -> Self {
        let total = profile.iter().map(|(_, weight)| weight).sum();
        LoadProfile { profile, total }
    }

    /// Picks the next action to run.
    pub fn next_action(&self, rng: &mut impl Rng) -> ActionType {
        let rnd = rng.gen_range(0..self.total);
        let mut part_sum = 0;

        for (action, weight) in &self.profile {
            part_sum += weight;
            if rnd < part_sum {
                return *action;
            }
        }
        ActionType::Add
    }

    /// Builds the weighted mix for a named profile.
    pub fn for_type(profile_type: LoadProfileType) -> Self {
        let profile = match profile_type {
            LoadProfileType::Full => vec![
                (ActionType::Add, 5),
                (ActionType::FindOne, 50),
                (ActionType::FindAll, 20),
                (ActionType::Update, 10),
                (ActionType::Delete, 1),
            ],
            LoadProfileType::AddOnly => vec![(ActionType::Add, 1)],
            LoadProfileType::FindOneOnly => vec![(ActionType::FindOne, 1)],
            LoadProfileType::FindAllOnly => vec![(ActionType::FindAll, 1)],
            LoadProfileType::UpdateOnly => vec![(ActionType::Update, 1)],
            // adds keep the store populated while deletes drain it
            LoadProfileType::DeleteAdd => {
                vec![(ActionType::Add, 1), (ActionType::Delete, 1)]
            }
        };
        LoadProfile::new(profile)
    }
}
