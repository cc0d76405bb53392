//! Property-based tests for the store and its persistence codec

#[cfg(test)]
mod tests {
    use crate::itinerary::codec::{decode_itinerary, encode_itinerary};
    use crate::itinerary::{DayField, ItemField, ItineraryStore, ITINERARY_KEY};
    use crate::storage::{KeyValueStore, MemoryBackend};
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Remove(usize, usize),
        UpdateItem(usize, usize, ItemField, String),
        UpdateDay(usize, DayField, String),
    }

    fn item_field() -> impl Strategy<Value = ItemField> {
        prop::sample::select(ItemField::ALL.to_vec())
    }

    fn day_field() -> impl Strategy<Value = DayField> {
        prop::sample::select(vec![DayField::Day, DayField::Date])
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0usize..3).prop_map(Op::Add),
            (0usize..3, any::<usize>()).prop_map(|(d, i)| Op::Remove(d, i)),
            (0usize..3, any::<usize>(), item_field(), any::<String>())
                .prop_map(|(d, i, f, v)| Op::UpdateItem(d, i, f, v)),
            (0usize..3, day_field(), any::<String>()).prop_map(|(d, f, v)| Op::UpdateDay(d, f, v)),
        ]
    }

    fn day_len(store: &ItineraryStore<MemoryBackend>, d: usize) -> usize {
        store.itinerary()[d].items.len()
    }

    /// Apply an op, mapping the arbitrary item position onto an existing one
    fn apply(store: &mut ItineraryStore<MemoryBackend>, op: Op) {
        match op {
            Op::Add(d) => {
                store.add_item(d).unwrap();
            }
            Op::Remove(d, i) => {
                if day_len(store, d) > 0 {
                    let i = i % day_len(store, d);
                    store.remove_item(d, i).unwrap();
                }
            }
            Op::UpdateItem(d, i, field, value) => {
                if day_len(store, d) > 0 {
                    let i = i % day_len(store, d);
                    store.update_item_field(d, i, field, value).unwrap();
                }
            }
            Op::UpdateDay(d, field, value) => {
                store.update_day_header(d, field, value).unwrap();
            }
        }
    }

    proptest! {
        #[test]
        fn test_itinerary_round_trips_after_any_edits(
            ops in prop::collection::vec(op(), 0..30)
        ) {
            let backend = MemoryBackend::new();
            let mut store = ItineraryStore::new(backend.clone());
            store.initialize();

            for op in ops {
                apply(&mut store, op);
            }

            let encoded = encode_itinerary(store.itinerary()).expect("encode");
            let decoded = decode_itinerary(&encoded).expect("decode");
            prop_assert_eq!(decoded.as_slice(), store.itinerary());

            // Whatever the store wrote last also rehydrates to the same value
            if let Some(raw) = backend.get(ITINERARY_KEY).unwrap() {
                let stored = decode_itinerary(&raw).expect("decode stored");
                prop_assert_eq!(stored.as_slice(), store.itinerary());
            }
        }
    }

    proptest! {
        #[test]
        fn test_toggle_twice_is_identity(
            id in "[a-z]{1,8}(-[a-z0-9]{1,8})?",
            pre_toggle in any::<bool>()
        ) {
            let mut store = ItineraryStore::new(MemoryBackend::new());
            store.initialize();
            if pre_toggle {
                store.toggle_checklist(&id);
            }
            let before = store.checklist().is_done(&id);

            store.toggle_checklist(&id);
            store.toggle_checklist(&id);

            prop_assert_eq!(store.checklist().is_done(&id), before);
        }
    }

    proptest! {
        #[test]
        fn test_reload_reproduces_state(
            ops in prop::collection::vec(op(), 0..15),
            toggles in prop::collection::vec(0usize..12, 0..6)
        ) {
            let backend = MemoryBackend::new();
            let mut store = ItineraryStore::new(backend.clone());
            store.initialize();

            let ids: Vec<String> = store
                .itinerary()
                .iter()
                .flat_map(|d| d.items.iter().map(|i| i.id.clone()))
                .collect();
            for t in toggles {
                store.toggle_checklist(&ids[t]);
            }
            for op in ops {
                apply(&mut store, op);
            }

            let mut reloaded = ItineraryStore::new(backend);
            let report = reloaded.initialize();
            prop_assert!(report.is_clean());
            prop_assert_eq!(reloaded.itinerary(), store.itinerary());
            prop_assert_eq!(reloaded.checklist(), store.checklist());
            prop_assert_eq!(reloaded.meta(), store.meta());
        }
    }
}
