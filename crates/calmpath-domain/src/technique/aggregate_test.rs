#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::shared::TechniqueId;

    fn technique(upvotes: i64, downvotes: i64) -> Technique {
        Technique::restore(
            TechniqueId::from_string("t1"),
            "Box Breathing".to_string(),
            "Meditation".to_string(),
            "Four-count breath cycle".to_string(),
            "https://img.example.com/box.jpg".to_string(),
            upvotes,
            downvotes,
        )
    }

    #[test]
    fn test_score_is_net_votes() {
        assert_eq!(technique(10, 3).score(), 7);
        assert_eq!(technique(2, 5).score(), -3);
        assert_eq!(technique(0, 0).score(), 0);
    }

    #[test]
    fn test_apply_vote() {
        let mut t = technique(1, 1);

        t.apply_vote(VoteKind::Up);
        assert_eq!(t.upvotes(), 2);
        assert_eq!(t.downvotes(), 1);

        t.apply_vote(VoteKind::Down);
        assert_eq!(t.downvotes(), 2);
        assert_eq!(t.score(), 0);
    }
}
