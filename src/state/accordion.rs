//! FAQ accordion: a set of collapsible items of which at most one is open.

use crate::error::{Error, Result};

/// Pure transition behind [`Accordion::toggle`]. An open item closes.
/// Otherwise every other item closes and `index` opens.
pub fn toggle_flags(flags: &[bool], index: usize) -> Vec<bool> {
    let was_open = flags.get(index).copied().unwrap_or(false);
    (0..flags.len()).map(|i| i == index && !was_open).collect()
}

/// Item ids from the ids found on the page. An empty or repeated id falls
/// back to `faq-{index}`. A fallback that is itself taken gets a numeric
/// suffix, so the result is always unique.
pub fn assign_ids<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let raw: Vec<String> = raw.into_iter().map(Into::into).collect();
    let mut ids: Vec<String> = Vec::with_capacity(raw.len());
    for (index, id) in raw.iter().enumerate() {
        let repeated = raw[..index].contains(id);
        if !id.is_empty() && !repeated {
            ids.push(id.clone());
            continue;
        }
        let base = format!("faq-{}", index);
        let mut candidate = base.clone();
        let mut suffix = 1;
        while raw.contains(&candidate) || ids.contains(&candidate) {
            candidate = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        ids.push(candidate);
    }
    ids
}

#[derive(Debug, Clone)]
pub struct Accordion {
    ids: Vec<String>,
    expanded: Vec<bool>,
}

impl Accordion {
    pub fn new<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: Vec<String> = Vec::new();
        for id in ids {
            let id = id.into();
            if seen.contains(&id) {
                return Err(Error::DuplicateId(id));
            }
            seen.push(id);
        }
        let expanded = vec![false; seen.len()];
        Ok(Self {
            ids: seen,
            expanded,
        })
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.ids
            .iter()
            .position(|known| known == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn toggle(&mut self, id: &str) -> Result<()> {
        let index = self.position(id)?;
        self.expanded = toggle_flags(&self.expanded, index);
        Ok(())
    }

    pub fn is_expanded(&self, id: &str) -> Result<bool> {
        Ok(self.expanded[self.position(id)?])
    }

    /// Id of the open item, if any.
    pub fn expanded(&self) -> Option<&str> {
        self.ids
            .iter()
            .zip(&self.expanded)
            .find(|(_, open)| **open)
            .map(|(id, _)| id.as_str())
    }

    pub fn items(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.expanded.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Accordion {
        Accordion::new(["a", "b", "c"]).unwrap()
    }

    #[test]
    fn starts_collapsed() {
        let accordion = abc();
        assert_eq!(accordion.expanded(), None);
        assert!(accordion.items().all(|(_, open)| !open));
    }

    #[test]
    fn selecting_another_item_collapses_the_first() {
        let mut accordion = abc();
        accordion.toggle("a").unwrap();
        assert_eq!(accordion.expanded(), Some("a"));
        assert!(!accordion.is_expanded("b").unwrap());
        assert!(!accordion.is_expanded("c").unwrap());

        accordion.toggle("b").unwrap();
        assert_eq!(accordion.expanded(), Some("b"));
        assert!(!accordion.is_expanded("a").unwrap());
        assert!(!accordion.is_expanded("c").unwrap());
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let mut accordion = abc();
        accordion.toggle("c").unwrap();
        accordion.toggle("c").unwrap();
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut accordion = abc();
        accordion.toggle("a").unwrap();
        let err = accordion.toggle("z").unwrap_err();
        assert!(matches!(err, Error::NotFound(ref id) if id == "z"));
        assert_eq!(accordion.expanded(), Some("a"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Accordion::new(["q1", "q2", "q1"]).unwrap_err();
        assert!(matches!(err, Error::DuplicateId(ref id) if id == "q1"));
    }

    #[test]
    fn assign_ids_keeps_unique_page_ids() {
        assert_eq!(assign_ids(["pricing", "refunds"]), vec!["pricing", "refunds"]);
    }

    #[test]
    fn assign_ids_replaces_empty_and_repeated_ids() {
        let ids = assign_ids(["", "shipping", "shipping", ""]);
        assert_eq!(ids, vec!["faq-0", "shipping", "faq-2", "faq-3"]);

        let mut accordion = Accordion::new(ids).unwrap();
        accordion.toggle("faq-2").unwrap();
        assert_eq!(accordion.expanded(), Some("faq-2"));
        assert!(!accordion.is_expanded("shipping").unwrap());
    }

    #[test]
    fn assign_ids_avoids_colliding_with_page_ids() {
        let ids = assign_ids(["faq-1", ""]);
        assert_eq!(ids, vec!["faq-1", "faq-1-1"]);
        assert!(Accordion::new(ids).is_ok());
    }

    #[test]
    fn toggle_flags_out_of_range_collapses_everything() {
        assert_eq!(toggle_flags(&[true, false], 7), vec![false, false]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn prop_at_most_one_expanded(
                len in 1usize..12,
                picks in prop::collection::vec(0usize..12, 0..60),
            ) {
                let ids: Vec<String> = (0..len).map(|i| format!("faq-{}", i)).collect();
                let mut accordion = Accordion::new(ids.clone()).unwrap();
                for pick in picks {
                    let id = &ids[pick % len];
                    accordion.toggle(id).unwrap();
                    prop_assert!(accordion.items().filter(|(_, open)| *open).count() <= 1);
                }
            }
        }
    }
}
