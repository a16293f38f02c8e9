//! Random but valid inputs for the load driver.

use boardstore::model::{BoundsFilter, PageRequest, WidgetDraft};
use rand::Rng;

/// Coordinates stay inside a fixed square board.
pub const MAX_COORDINATE: i32 = 10_000;
/// Widget extents and explicit ranks stay below this bound.
pub const MAX_SIZE: i32 = 1_000;
/// Largest offset a generated page request asks for.
pub const MAX_OFFSET: usize = 5_000;
/// Largest page size a generated page request asks for.
pub const MAX_PAGE_SIZE: usize = 100;

/// Generates a valid draft.
///
/// Explicit ranks land in a deliberately narrow band so rank collisions,
/// and with them push-out cascades, happen constantly. A missing rank is
/// only allowed where the caller permits it (new widgets being stacked on
/// top).
pub fn random_draft(rng: &mut impl Rng, allow_missing_rank: bool) -> WidgetDraft {
    let draft = WidgetDraft::new(
        rng.gen_range(0..MAX_COORDINATE),
        rng.gen_range(0..MAX_COORDINATE),
        rng.gen_range(1..=MAX_SIZE),
        rng.gen_range(1..=MAX_SIZE),
    );

    if allow_missing_rank && rng.gen_bool(0.5) {
        draft
    } else {
        draft.z_index(rng.gen_range(0..MAX_SIZE))
    }
}

/// Generates an empty filter half the time, otherwise a valid bounding
/// rectangle straddling the middle of the board.
pub fn random_filter(rng: &mut impl Rng) -> BoundsFilter {
    if rng.gen_bool(0.5) {
        BoundsFilter::new()
    } else {
        BoundsFilter::bounded(
            rng.gen_range(0..MAX_COORDINATE / 2),
            MAX_COORDINATE / 2 + rng.gen_range(0..MAX_COORDINATE / 2),
            rng.gen_range(0..MAX_COORDINATE / 2),
            MAX_COORDINATE / 2 + rng.gen_range(0..MAX_COORDINATE / 2),
        )
    }
}

/// Generates a page request with a non-zero limit.
pub fn random_page(rng: &mut impl Rng) -> PageRequest {
    PageRequest::new(
        rng.gen_range(0..MAX_OFFSET),
        rng.gen_range(1..=MAX_PAGE_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_drafts_are_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let draft = random_draft(&mut rng, true);
            assert!(draft.width > 0 && draft.height > 0);
            assert!(draft.x >= 0 && draft.x < MAX_COORDINATE);
        }
    }

    #[test]
    fn test_forbidden_missing_rank_is_always_present() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(random_draft(&mut rng, false).z_index.is_some());
        }
    }

    #[test]
    fn test_filters_are_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            let filter = random_filter(&mut rng);
            assert!(filter.is_valid());
        }
    }

    #[test]
    fn test_pages_have_positive_limits() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert!(random_page(&mut rng).limit > 0);
        }
    }
}
