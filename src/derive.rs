use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::{CategorySet, Challenge};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub solved: usize,
}

/// Everything the view needs, recomputed from the raw inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derived {
    /// Filtered and sorted challenges.
    pub display: Vec<Challenge>,
    /// Per category, over the unfiltered list.
    pub tallies: BTreeMap<String, Tally>,
    pub solved_count: usize,
    pub total: usize,
}

impl Derived {
    /// True when the solved list is hidden and every challenge is in it.
    pub fn solved_all(&self, show_solved: bool) -> bool {
        !show_solved && self.solved_count == self.total
    }
}

/// Computes the display list and tallies.
///
/// Category flags are an include-list only once any of them is set: with no
/// flag set nothing is filtered, with at least one set every category whose
/// flag is `false` is hidden. Categories missing from the map are never
/// hidden.
pub fn derive(
    challenges: &[Challenge],
    categories: &CategorySet,
    show_solved: bool,
    solved: &BTreeSet<String>,
) -> Derived {
    let filter_categories = categories.any_selected();

    let mut display: Vec<Challenge> = challenges
        .iter()
        .filter(|c| show_solved || !solved.contains(&c.id))
        .filter(|c| !filter_categories || categories.get(&c.category) != Some(false))
        .cloned()
        .collect();

    display.sort_by_key(|c| (c.points, Reverse(c.solves)));

    let mut tallies: BTreeMap<String, Tally> = BTreeMap::new();
    let mut solved_count = 0;
    for challenge in challenges {
        let tally = tallies.entry(challenge.category.clone()).or_default();
        tally.total += 1;
        if solved.contains(&challenge.id) {
            tally.solved += 1;
            solved_count += 1;
        }
    }

    Derived {
        display,
        tallies,
        solved_count,
        total: challenges.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoKey {
    challenges: Vec<Challenge>,
    categories: CategorySet,
    show_solved: bool,
    solved: BTreeSet<String>,
}

impl MemoKey {
    fn matches(
        &self,
        challenges: &[Challenge],
        categories: &CategorySet,
        show_solved: bool,
        solved: &BTreeSet<String>,
    ) -> bool {
        self.show_solved == show_solved
            && self.categories == *categories
            && self.solved == *solved
            && self.challenges == challenges
    }
}

/// Caches the last [`derive`] result, keyed by value on all four inputs.
#[derive(Debug, Default)]
pub struct DerivationMemo {
    key: Option<MemoKey>,
    value: Derived,
    recomputes: usize,
}

impl DerivationMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &mut self,
        challenges: &[Challenge],
        categories: &CategorySet,
        show_solved: bool,
        solved: &BTreeSet<String>,
    ) -> &Derived {
        let fresh = self
            .key
            .as_ref()
            .is_some_and(|key| key.matches(challenges, categories, show_solved, solved));

        if !fresh {
            self.value = derive(challenges, categories, show_solved, solved);
            self.key = Some(MemoKey {
                challenges: challenges.to_vec(),
                categories: categories.clone(),
                show_solved,
                solved: solved.clone(),
            });
            self.recomputes += 1;
            debug!(
                shown = self.value.display.len(),
                total = self.value.total,
                recomputes = self.recomputes,
                "derived view recomputed"
            );
        }

        &self.value
    }

    /// Number of times the value was actually recomputed.
    #[cfg(test)]
    pub fn recomputes(&self) -> usize {
        self.recomputes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solved(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn ids(derived: &Derived) -> Vec<&str> {
        derived.display.iter().map(|c| c.id.as_str()).collect()
    }

    fn board() -> Vec<Challenge> {
        vec![
            Challenge::sample("a", "web", 300, 2),
            Challenge::sample("b", "pwn", 100, 1),
            Challenge::sample("c", "web", 100, 9),
            Challenge::sample("d", "crypto", 200, 4),
            Challenge::sample("e", "pwn", 100, 5),
        ]
    }

    fn all_unselected() -> CategorySet {
        [("web", false), ("pwn", false), ("crypto", false)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_not_loaded_is_empty() {
        let derived = derive(&[], &CategorySet::new(), false, &solved(&[]));
        assert_eq!(derived, Derived::default());
    }

    #[test]
    fn test_sort_points_then_solves_desc() {
        let derived = derive(&board(), &all_unselected(), false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["c", "e", "b", "d", "a"]);

        for pair in derived.display.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(a.points < b.points || (a.points == b.points && a.solves >= b.solves));
        }
    }

    #[test]
    fn test_negative_points_sort_first() {
        let list = vec![
            Challenge::sample("x", "web", 100, 1),
            Challenge::sample("y", "web", -20, 0),
            Challenge::sample("z", "web", 0, 3),
        ];
        let derived = derive(&list, &CategorySet::new(), false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["y", "z", "x"]);
    }

    #[test]
    fn test_sort_is_stable_on_full_ties() {
        let list = vec![
            Challenge::sample("x", "web", 100, 1),
            Challenge::sample("y", "web", 100, 1),
        ];
        let derived = derive(&list, &CategorySet::new(), false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["x", "y"]);
    }

    #[test]
    fn test_hides_solved_unless_shown() {
        let list = vec![
            Challenge::sample("1", "web", 100, 0),
            Challenge::sample("2", "web", 100, 0),
        ];
        let hidden = derive(&list, &CategorySet::new(), false, &solved(&["1"]));
        assert_eq!(ids(&hidden), vec!["2"]);

        let shown = derive(&list, &CategorySet::new(), true, &solved(&["1"]));
        assert_eq!(ids(&shown), vec!["1", "2"]);
    }

    #[test]
    fn test_no_selection_shows_every_category() {
        let derived = derive(&board(), &all_unselected(), false, &solved(&[]));
        assert_eq!(derived.display.len(), 5);
    }

    // Flags act as an include-list only once one of them is on. An
    // unselected category is visible while nothing is selected and hidden as
    // soon as anything else is.
    #[test]
    fn test_selection_inverts_into_include_list() {
        let mut categories = all_unselected();
        categories.set("pwn", true);

        let derived = derive(&board(), &categories, false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["e", "b"]);

        categories.set("crypto", true);
        let derived = derive(&board(), &categories, false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["e", "b", "d"]);
    }

    #[test]
    fn test_unknown_category_never_hidden() {
        let mut categories: CategorySet = [("pwn", true), ("crypto", false)].into_iter().collect();
        categories.set("web", false);
        let mut list = board();
        list.push(Challenge::sample("f", "misc", 50, 0));

        let derived = derive(&list, &categories, false, &solved(&[]));
        assert_eq!(ids(&derived), vec!["f", "e", "b"]);
    }

    #[test]
    fn test_stale_selected_category_hides_everything_else() {
        let mut categories = all_unselected();
        categories.set("forensics", true);
        let derived = derive(&board(), &categories, false, &solved(&[]));
        assert!(derived.display.is_empty());
        assert_eq!(derived.total, 5);
    }

    #[test]
    fn test_tallies_ignore_filters() {
        let list = vec![
            Challenge::sample("1", "web", 100, 0),
            Challenge::sample("2", "web", 200, 0),
            Challenge::sample("3", "pwn", 200, 0),
        ];
        let categories: CategorySet = [("web", false), ("pwn", true)].into_iter().collect();

        let derived = derive(&list, &categories, false, &solved(&["1"]));
        assert_eq!(ids(&derived), vec!["3"]);
        assert_eq!(derived.tallies["web"], Tally { total: 2, solved: 1 });
        assert_eq!(derived.tallies["pwn"], Tally { total: 1, solved: 0 });
        assert_eq!(derived.solved_count, 1);
        assert_eq!(derived.total, 3);
    }

    #[test]
    fn test_solved_ids_outside_list_not_counted() {
        let derived = derive(&board(), &all_unselected(), false, &solved(&["a", "zzz"]));
        assert_eq!(derived.solved_count, 1);
    }

    #[test]
    fn test_solved_all() {
        let list = vec![
            Challenge::sample("1", "web", 100, 0),
            Challenge::sample("2", "pwn", 100, 0),
        ];
        let all = solved(&["1", "2"]);

        let derived = derive(&list, &CategorySet::new(), false, &all);
        assert!(derived.display.is_empty());
        assert!(derived.solved_all(false));
        assert!(!derived.solved_all(true));

        let derived = derive(&list, &CategorySet::new(), true, &all);
        assert_eq!(derived.display.len(), 2);
    }

    #[test]
    fn test_derive_is_pure() {
        let mut categories = all_unselected();
        categories.set("web", true);
        let ids = solved(&["c"]);
        let first = derive(&board(), &categories, false, &ids);
        let second = derive(&board(), &categories, false, &ids);
        assert_eq!(first, second);
    }

    #[test]
    fn test_memo_recomputes_only_on_change() {
        let list = board();
        let mut categories = all_unselected();
        let ids = solved(&[]);
        let mut memo = DerivationMemo::new();

        let first = memo.get(&list, &categories, false, &ids).clone();
        memo.get(&list, &categories, false, &ids);
        assert_eq!(memo.recomputes(), 1);

        categories.set("web", true);
        let second = memo.get(&list, &categories, false, &ids).clone();
        assert_eq!(memo.recomputes(), 2);
        assert_ne!(first, second);
        assert_eq!(second, derive(&list, &categories, false, &ids));

        memo.get(&list, &categories, true, &ids);
        assert_eq!(memo.recomputes(), 3);
    }
}
