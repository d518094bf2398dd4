use archive_graph::{Direction, GraphStore};
use proptest::prelude::*;

fn entity_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,6}:[A-Za-z0-9]{1,6}"
}

proptest! {
    /// 1-hop boost expansion never needs cycle bookkeeping: querying a
    /// node's own outgoing neighbors never reports the node itself
    /// unless an edge was explicitly added back to it.
    #[test]
    fn single_hop_does_not_surface_self_without_explicit_self_edge(
        a in entity_strategy(), b in entity_strategy(), rel in "[A-Z_]{1,10}",
    ) {
        prop_assume!(a != b);
        let mut g = GraphStore::new();
        g.add_relationship(&a, &b, &rel).unwrap();

        let out = g.get_related_entities(&a, None, Direction::Outgoing);
        prop_assert!(out.iter().all(|(n, _)| n != &a));
    }

    /// Repeated inserts of the same (src, tgt, relation) triple never
    /// grow the edge count beyond one.
    #[test]
    fn add_relationship_is_idempotent(
        a in entity_strategy(), b in entity_strategy(), rel in "[A-Z_]{1,10}", times in 1usize..5,
    ) {
        let mut g = GraphStore::new();
        for _ in 0..times {
            g.add_relationship(&a, &b, &rel).unwrap();
        }
        prop_assert_eq!(g.edge_count(), 1);
    }

    /// Both-direction queries never report more entries than the sum of
    /// outgoing and incoming edges, since dedup can only shrink the set.
    #[test]
    fn both_direction_is_bounded_by_outgoing_plus_incoming(
        a in entity_strategy(), b in entity_strategy(), rel in "[A-Z_]{1,10}",
    ) {
        let mut g = GraphStore::new();
        g.add_relationship(&a, &b, &rel).unwrap();

        let out = g.get_related_entities(&a, None, Direction::Outgoing).len();
        let inc = g.get_related_entities(&a, None, Direction::Incoming).len();
        let both = g.get_related_entities(&a, None, Direction::Both).len();
        prop_assert!(both <= out + inc);
    }
}
