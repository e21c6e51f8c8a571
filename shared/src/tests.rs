#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::candidates::{self, ROSTER};
    use crate::error::ErrorCode;
    use crate::models::{Candidate, Category};
    use crate::session::{DeviceSession, DeviceStore, MemoryStore};
    use crate::tally::{leaderboard, tally};

    fn session() -> DeviceSession<MemoryStore> {
        DeviceSession::new(MemoryStore::default())
    }

    fn counts(rows: &[&str]) -> HashMap<String, u32> {
        tally(rows.iter().copied())
    }

    const fn councillor(id: &'static str, name: &'static str) -> Candidate {
        Candidate {
            id,
            name,
            category: Category::Councillor,
            ward: "Taupō Ward",
            hp: 90,
            image: "",
            vibe: "",
            quote: "",
            totem: "",
        }
    }

    #[test]
    fn category_caps_and_keys() {
        assert_eq!(Category::Mayor.vote_cap(), 2);
        assert_eq!(Category::Councillor.vote_cap(), 7);
        assert_eq!(Category::Mayor.storage_key(), "mayorVotes");
        assert_eq!(Category::Councillor.storage_key(), "councillorVotes");
        assert_eq!("mayor".parse::<Category>(), Ok(Category::Mayor));
        assert!("alderman".parse::<Category>().is_err());
    }

    #[test]
    fn mayor_cap_scenario() {
        let mut s = session();
        s.check(Category::Mayor, "a").unwrap();
        s.commit(Category::Mayor, "a").unwrap();
        s.check(Category::Mayor, "b").unwrap();
        s.commit(Category::Mayor, "b").unwrap();

        let duplicate = s.check(Category::Mayor, "a").unwrap_err();
        assert_eq!(duplicate.code, ErrorCode::DuplicateVote);

        let over_cap = s.check(Category::Mayor, "c").unwrap_err();
        assert_eq!(over_cap.code, ErrorCode::CapExceeded);

        assert_eq!(s.recorded(Category::Mayor), vec!["a", "b"]);
    }

    #[test]
    fn duplicate_checked_before_cap() {
        // A full record still reports the duplicate, not the cap.
        let mut s = session();
        s.commit(Category::Mayor, "a").unwrap();
        s.commit(Category::Mayor, "b").unwrap();
        let err = s.check(Category::Mayor, "a").unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateVote);
    }

    #[test]
    fn check_never_mutates() {
        let mut s = session();
        s.commit(Category::Councillor, "x").unwrap();
        let before = s.recorded(Category::Councillor);

        s.check(Category::Councillor, "y").unwrap();
        assert!(s.check(Category::Councillor, "x").is_err());

        assert_eq!(s.recorded(Category::Councillor), before);
    }

    #[test]
    fn failed_ledger_write_leaves_record_untouched() {
        // The controller only commits after a confirmed write; a failed
        // write means check passed but commit never ran.
        let mut s = session();
        s.commit(Category::Mayor, "a").unwrap();
        let before = s.recorded(Category::Mayor);

        s.check(Category::Mayor, "b").unwrap();
        // simulated insert failure: no commit

        assert_eq!(s.recorded(Category::Mayor), before);
    }

    #[test]
    fn record_never_exceeds_cap_or_duplicates() {
        let mut s = session();
        for id in ["c1", "c2", "c3", "c4", "c5", "c6", "c7"] {
            s.commit(Category::Councillor, id).unwrap();
        }
        assert!(s.commit(Category::Councillor, "c8").is_err());
        assert!(s.commit(Category::Councillor, "c1").is_err());

        let recorded = s.recorded(Category::Councillor);
        assert_eq!(recorded.len(), Category::Councillor.vote_cap());
        let mut unique = recorded.clone();
        unique.dedup();
        assert_eq!(unique, recorded);
    }

    #[test]
    fn categories_are_independent_records() {
        let mut s = session();
        s.commit(Category::Mayor, "a").unwrap();
        s.commit(Category::Mayor, "b").unwrap();

        // Mayor record being full does not touch the councillor record.
        s.check(Category::Councillor, "a").unwrap();
        s.commit(Category::Councillor, "a").unwrap();
        assert_eq!(s.recorded(Category::Councillor), vec!["a"]);
    }

    #[test]
    fn voter_id_generated_once_and_persisted() {
        let mut store = MemoryStore::default();
        store.set("unrelated", "kept").unwrap();
        let mut s = DeviceSession::new(store);

        let first = s.voter_id().unwrap();
        let second = s.voter_id().unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn corrupt_record_reads_as_empty() {
        let mut store = MemoryStore::default();
        store.set(Category::Mayor.storage_key(), "not json").unwrap();
        let s = DeviceSession::new(store);
        assert!(s.recorded(Category::Mayor).is_empty());
        s.check(Category::Mayor, "a").unwrap();
    }

    #[test]
    fn tally_counts_rows_per_candidate() {
        let counts = counts(&["x", "y", "x"]);
        assert_eq!(counts.get("x"), Some(&2));
        assert_eq!(counts.get("y"), Some(&1));
        assert_eq!(counts.get("z"), None);
    }

    #[test]
    fn leaderboard_sorts_descending_with_zero_for_absent() {
        let board = leaderboard(ROSTER, &counts(&["duncan-mcrae", "gavin-holt", "duncan-mcrae"]), Category::Mayor);
        assert_eq!(board[0].candidate.id, "duncan-mcrae");
        assert_eq!(board[0].count, 2);
        assert_eq!(board[1].candidate.id, "gavin-holt");
        assert!(board[2..].iter().all(|s| s.count == 0));

        let mayors = ROSTER.iter().filter(|c| c.category == Category::Mayor).count();
        assert_eq!(board.len(), mayors);
    }

    #[test]
    fn two_rows_rank_above_one() {
        let board = leaderboard(ROSTER, &counts(&["hemi-walker", "june-abbott", "hemi-walker"]), Category::Councillor);
        let pos = |id: &str| board.iter().position(|s| s.candidate.id == id).unwrap();
        assert!(pos("hemi-walker") < pos("june-abbott"));
    }

    #[test]
    fn withdrawn_candidate_never_ranked() {
        // Even with ledger rows, the withdrawn id stays off the board.
        let board = leaderboard(ROSTER, &counts(&["katrin-wilson", "katrin-wilson"]), Category::Councillor);
        assert!(board.iter().all(|s| s.candidate.id != "katrin-wilson"));
        assert!(candidates::is_withdrawn("katrin-wilson"));
    }

    #[test]
    fn ties_keep_roster_order() {
        const TIED: &[Candidate] = &[
            councillor("first", "First"),
            councillor("second", "Second"),
            councillor("third", "Third"),
        ];
        let board = leaderboard(TIED, &counts(&["third", "first", "second"]), Category::Councillor);
        let order: Vec<_> = board.iter().map(|s| s.candidate.id).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn roster_ids_unique_and_resolvable() {
        for (i, c) in ROSTER.iter().enumerate() {
            assert!(ROSTER[i + 1..].iter().all(|other| other.id != c.id), "duplicate id {}", c.id);
            assert_eq!(candidates::find(c.id).map(|f| f.name), Some(c.name));
        }
        assert!(candidates::find("nobody").is_none());
    }
}
