use std::cmp::Ordering;

use super::geo::distance_km;
use crate::entities::*;

pub trait DistanceTo {
    fn distance_to(&self, pos: MapPoint) -> f64;
}

impl DistanceTo for Bathroom {
    fn distance_to(&self, pos: MapPoint) -> f64 {
        distance_km(pos, self.pos)
    }
}

pub trait SortByDistanceTo {
    /// Stable: items with equal distances keep their relative order.
    fn sort_by_distance_to(&mut self, pos: MapPoint);
}

impl<T> SortByDistanceTo for [T]
where
    T: DistanceTo,
{
    fn sort_by_distance_to(&mut self, pos: MapPoint) {
        if self.len() < 2 {
            return;
        }
        // Calculate each distance only once
        let mut indexed: Vec<_> = self
            .iter()
            .enumerate()
            .map(|(i, x)| (i, x.distance_to(pos)))
            .collect();
        indexed.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let order: Vec<_> = indexed.into_iter().map(|(i, _)| i).collect();
        apply_permutation(self, order);
    }
}

// Moves the element at `order[i]` to position `i`.
fn apply_permutation<T>(items: &mut [T], mut order: Vec<usize>) {
    for i in 0..items.len() {
        let mut current = i;
        while order[current] != i {
            let next = order[current];
            items.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}
