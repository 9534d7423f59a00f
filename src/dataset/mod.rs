//! Datasets
//!
//! This module implements the dataset struct used throughout the workspace:
//! a dense feature matrix with one numeric target per sample and optional
//! descriptive feature names.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// In-memory tabular dataset
///
/// # Fields
///
/// * `records`: a two-dimensional matrix with dimensionality (nsamples, nfeatures)
/// * `targets`: one numeric target per sample with dimensionality (nsamples)
/// * `feature_names`: optional descriptive feature names with dimensionality (nfeatures)
///
/// The container is immutable after construction; the transforms below
/// consume `self` and return a new dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Array2<f64>,
    targets: Array1<f64>,
    feature_names: Vec<String>,
}

impl Dataset {
    /// Create a new dataset from a feature matrix and a target vector
    pub fn new(records: Array2<f64>, targets: Array1<f64>) -> Dataset {
        Dataset {
            records,
            targets,
            feature_names: Vec::new(),
        }
    }

    /// Replace the feature names, one per feature column
    pub fn with_feature_names<S: Into<String>>(mut self, names: Vec<S>) -> Dataset {
        self.feature_names = names.into_iter().map(|x| x.into()).collect();
        self
    }

    pub fn records(&self) -> ArrayView2<f64> {
        self.records.view()
    }

    pub fn targets(&self) -> ArrayView1<f64> {
        self.targets.view()
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    /// Apply `fnc` to every target value, leaving the records untouched
    pub fn map_targets<G: FnMut(f64) -> f64>(mut self, fnc: G) -> Dataset {
        self.targets = self.targets.mapv_into(fnc);
        self
    }

    /// Shuffle the sample order with the given random number generator
    ///
    /// Records and targets are permuted together, so the sample/target
    /// association is preserved.
    pub fn shuffle<R: Rng>(self, rng: &mut R) -> Dataset {
        let mut indices = (0..self.nsamples()).collect::<Vec<_>>();
        indices.shuffle(rng);

        let records = self.records.select(Axis(0), &indices);
        let targets = self.targets.select(Axis(0), &indices);

        Dataset {
            records,
            targets,
            feature_names: self.feature_names,
        }
    }

    /// Split the dataset into two disjoint parts
    ///
    /// The first part receives `ceil(nsamples * ratio)` samples, the second
    /// the remainder. Sample order is kept, so shuffle first for a random
    /// partition.
    pub fn split_with_ratio(self, ratio: f32) -> (Dataset, Dataset) {
        let n = (self.nsamples() as f32 * ratio).ceil() as usize;
        let n = n.min(self.nsamples());

        let first = Dataset {
            records: self.records.slice(s![..n, ..]).to_owned(),
            targets: self.targets.slice(s![..n]).to_owned(),
            feature_names: self.feature_names.clone(),
        };
        let second = Dataset {
            records: self.records.slice(s![n.., ..]).to_owned(),
            targets: self.targets.slice(s![n..]).to_owned(),
            feature_names: self.feature_names,
        };

        (first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn dataset_implements_required_methods() {
        let mut rng = SmallRng::seed_from_u64(42);

        // New
        let dataset = Dataset::new(array![[1., 2.], [3., 4.]], array![0., 1.]);
        assert_eq!(dataset.nsamples(), 2);
        assert_eq!(dataset.nfeatures(), 2);

        // Shuffle keeps the sample/target association
        let dataset = dataset.shuffle(&mut rng);
        for (row, target) in dataset.records().outer_iter().zip(dataset.targets()) {
            if *target == 0. {
                assert_abs_diff_eq!(row[0], 1.);
            } else {
                assert_abs_diff_eq!(row[0], 3.);
            }
        }

        // Split with ratio
        let linspace: Array1<f64> = Array1::linspace(0.0, 0.8, 100);
        let records = Array2::from_shape_vec((50, 2), linspace.to_vec()).unwrap();
        let targets: Array1<f64> = Array1::linspace(0.0, 0.8, 50);
        let dataset = Dataset::new(records, targets);

        let (train, val) = dataset.split_with_ratio(0.25);
        assert_eq!(train.nsamples(), 13);
        assert_eq!(val.nsamples(), 37);
        assert_eq!(train.targets().len(), 13);
        assert_eq!(val.targets().len(), 37);
    }

    #[test]
    fn shuffle_is_deterministic_for_fixed_seed() {
        let records = Array2::from_shape_fn((20, 3), |(i, j)| (i * 3 + j) as f64);
        let targets = Array1::from_shape_fn(20, |i| i as f64);

        let mut rng = SmallRng::seed_from_u64(42);
        let first = Dataset::new(records.clone(), targets.clone()).shuffle(&mut rng);

        let mut rng = SmallRng::seed_from_u64(42);
        let second = Dataset::new(records, targets).shuffle(&mut rng);

        assert_eq!(first.targets(), second.targets());
        assert_eq!(first.records(), second.records());
    }

    #[test]
    fn map_targets_rewrites_only_targets() {
        let dataset = Dataset::new(array![[1., 2.], [3., 4.], [5., 6.]], array![0., 1., 2.])
            .map_targets(|t| if t == 2. { 1. } else { 0. });

        assert_eq!(dataset.targets().to_vec(), vec![0., 0., 1.]);
        assert_eq!(dataset.records().dim(), (3, 2));
    }

    #[test]
    fn feature_names_survive_transforms() {
        let mut rng = SmallRng::seed_from_u64(7);
        let dataset = Dataset::new(array![[1., 2.], [3., 4.]], array![0., 1.])
            .with_feature_names(vec!["width", "height"]);

        let (train, val) = dataset.shuffle(&mut rng).split_with_ratio(0.5);
        assert_eq!(train.feature_names(), &["width", "height"]);
        assert_eq!(val.feature_names(), &["width", "height"]);
    }
}
