use crate::Energy;
use crate::Scalar;

/// One cluster center in feature space.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Centroid(Vec<Scalar>);

impl Centroid {
    pub fn coordinates(&self) -> &[Scalar] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// squared euclidean distance to a row
    pub fn distance(&self, row: &[Scalar]) -> Energy {
        self.0
            .iter()
            .zip(row.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl From<Vec<Scalar>> for Centroid {
    fn from(coordinates: Vec<Scalar>) -> Self {
        Self(coordinates)
    }
}

/// Compute the nearest center in O(k) * MetricCost.
/// Callers guarantee a non-empty center set.
pub fn nearest(centers: &[Centroid], row: &[Scalar]) -> (usize, Energy) {
    centers
        .iter()
        .enumerate()
        .map(|(i, c)| (i, c.distance(row)))
        .min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).expect("comparable distances"))
        .expect("non-empty centers")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_squared_euclidean() {
        let centroid = Centroid::from(vec![0., 0.]);
        assert_eq!(centroid.distance(&[3., 4.]), 25.);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let centroid = Centroid::from(vec![1., 2., 3.]);
        assert_eq!(centroid.distance(&[1., 2., 3.]), 0.);
    }

    #[test]
    fn nearest_picks_the_closest_center() {
        let centers = vec![
            Centroid::from(vec![0., 0.]),
            Centroid::from(vec![10., 0.]),
            Centroid::from(vec![0., 10.]),
        ];
        let (index, distance) = nearest(&centers, &[9., 1.]);
        assert_eq!(index, 1);
        assert_eq!(distance, 2.);
    }
}
