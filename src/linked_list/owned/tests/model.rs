extern crate std;

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::owned::{LinkedList, traits::Link};

/// A `Vec` that applies the same edge policy as the list.
#[derive(Default)]
struct Model {
    values: Vec<i32>,
}

impl Model {
    fn insert_at(&mut self, value: i32, index: i64) {
        let Ok(index) = usize::try_from(index) else {
            return;
        };
        self.values.insert(index.min(self.values.len()), value);
    }

    fn remove_at(&mut self, index: i64) -> Option<i32> {
        let index = usize::try_from(index).ok()?;
        match self.values.len() {
            0 => None,
            1 => Some(self.values.remove(0)),
            len => Some(self.values.remove(index.min(len - 1))),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for value in &self.values {
            out.push_str(&format!("( {value} ) -> "));
        }
        out.push_str("null");
        out
    }
}

fn check(list: &LinkedList<i32>, model: &Model) {
    let len = list.len();
    assert_eq!(len, model.values.len());
    assert_eq!(list.is_empty(), model.values.is_empty());

    // Walk the raw links; the chain has to end within len + 1 steps.
    let mut steps = 0;
    let mut link = list.next();
    while let Some(node) = link {
        steps += 1;
        assert!(steps <= model.values.len(), "chain runs past {} nodes", model.values.len());
        link = node.next();
    }
    assert_eq!(steps, model.values.len());

    assert_eq!(list.to_string(), model.render());
    assert!(list.to_string().ends_with("null"));

    for (i, value) in model.values.iter().enumerate() {
        assert_eq!(list.at(i), Some(value));
    }
    assert_eq!(list.at(len), None);
    assert_eq!(list.head().ok(), model.values.first());
    assert_eq!(list.tail().ok(), model.values.last());
}

#[test]
fn test_random_operations_match_model() {
    let mut rng = StdRng::seed_from_u64(0x11_57);
    let mut list = LinkedList::new();
    let mut model = Model::default();

    for step in 0..2_000 {
        let value = rng.random_range(-50..50);
        match rng.random_range(0..6) {
            0 => {
                list.append(value);
                model.values.push(value);
            }
            1 => {
                list.prepend(value);
                model.values.insert(0, value);
            }
            2 => {
                let index = rng.random_range(-2..model.values.len() as i64 + 3);
                list.insert_at(value, index);
                model.insert_at(value, index);
            }
            3 => {
                let index = rng.random_range(-2..model.values.len() as i64 + 3);
                let before = list.len();
                let removed = list.remove_at(index);
                assert_eq!(removed, model.remove_at(index), "step {step}");
                if before > 0 && index >= 0 {
                    assert_eq!(list.len(), before - 1);
                } else {
                    assert_eq!(list.len(), before);
                }
            }
            4 => {
                assert_eq!(list.pop(), model.values.pop(), "step {step}");
            }
            _ => {
                let found = list.find(&value);
                assert_eq!(found.is_some(), list.contains(&value));
                assert_eq!(found, model.values.iter().position(|v| *v == value));
                if let Some(index) = found {
                    assert_eq!(list.at(index), Some(&value));
                }
            }
        }
        check(&list, &model);
    }
}

#[test]
fn test_insert_at_zero_then_at_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut list: LinkedList<i32> = LinkedList::new();
    for _ in 0..100 {
        let value = rng.random();
        list.insert_at(value, 0);
        assert_eq!(list.at(0), Some(&value));
        if rng.random_bool(0.3) {
            list.pop();
        }
    }
}
