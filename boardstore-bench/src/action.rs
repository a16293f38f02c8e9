/// The five store operations a load profile can weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionType {
    Add,
    FindOne,
    FindAll,
    Update,
    Delete,
}
