//! `fitlog-datasets` provides the toy datasets used by the fitlog demo
//! pipeline and test suites, ready to be loaded into a [`fitlog::Dataset`].
//!
//! Currently only the iris flower dataset is shipped. It is embedded into the
//! library as a gzipped CSV and decoded at load time:
//!
//! ```ignore
//! let (train, valid) = fitlog_datasets::iris()
//!     .split_with_ratio(0.8);
//! ```

use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use ndarray::prelude::*;
use ndarray_csv::Array2Reader;

use fitlog::Dataset;

fn array_from_buf(buf: &[u8]) -> Array2<f64> {
    let file = GzDecoder::new(buf);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(file);

    reader.deserialize_array2_dynamic().unwrap()
}

/// Read in the iris flower dataset
///
/// 150 samples with four numeric features each; the target column holds the
/// species as a numeric code (0 = setosa, 1 = versicolor, 2 = virginica).
/// Pipelines that want a binary label derive it with
/// [`Dataset::map_targets`].
pub fn iris() -> Dataset {
    let data = include_bytes!("../data/iris.csv.gz");
    let array = array_from_buf(&data[..]);

    let (data, targets) = (
        array.slice(s![.., 0..4]).to_owned(),
        array.column(4).to_owned(),
    );

    let feature_names = vec!["sepal length", "sepal width", "petal length", "petal width"];

    Dataset::new(data, targets).with_feature_names(feature_names)
}
