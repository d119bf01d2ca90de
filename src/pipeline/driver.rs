use super::config::Config;
use super::error::Error;
use super::report::Report;
use crate::cluster;
use crate::cluster::Centroid;
use crate::cluster::Oracle;
use crate::data::Frame;
use crate::data::Source;
use crate::sink::Sink;
use rayon::prelude::*;
use std::time::Instant;

/// The whole run, parameterized at its three seams.
///
/// Load, reshape, cluster, encode, emit. Rows are independent of one
/// another, so the encode and assignment stages fan out across threads;
/// any failure aborts the batch with the offending row identified.
pub struct Pipeline<S, O, K> {
    config: Config,
    source: S,
    oracle: O,
    sink: K,
}

impl<S, O, K> Pipeline<S, O, K>
where
    S: Source,
    O: Oracle,
    K: Sink,
{
    pub fn new(config: Config, source: S, oracle: O, sink: K) -> Self {
        Self {
            config,
            source,
            oracle,
            sink,
        }
    }

    pub fn run(mut self) -> Result<Report, Error> {
        let clock = Instant::now();
        let frame = self.load()?;
        let view = self.view(&frame)?;
        let load_ms = clock.elapsed().as_millis() as u64;

        let clock = Instant::now();
        let centroids = self.cluster(&view)?;
        let populations = Self::assign(&view, &centroids);
        let cluster_ms = clock.elapsed().as_millis() as u64;

        let clock = Instant::now();
        let reps = self.encode(&frame)?;
        self.sink.rows(&reps)?;
        self.sink.centers(&centroids)?;
        let encode_ms = clock.elapsed().as_millis() as u64;

        let report = Report {
            rows: frame.n(),
            columns: frame.m(),
            clusters: centroids.len(),
            populations,
            load_ms,
            cluster_ms,
            encode_ms,
        };
        log::info!("pipeline complete\n{}", report);
        Ok(report)
    }

    /// source then label drop; rows stay raw for the codec
    fn load(&self) -> Result<Frame, Error> {
        let frame = self.source.load()?;
        match &self.config.label {
            Some(name) => Ok(frame.drop(name)?),
            None => Ok(frame),
        }
    }

    /// what the oracle sees; standardization never touches the encoded rows
    fn view(&self, frame: &Frame) -> Result<Frame, Error> {
        match self.config.standardize {
            true => Ok(frame.standardize()?),
            false => Ok(frame.clone()),
        }
    }

    /// centers from the oracle, count checked against configuration
    fn cluster(&self, frame: &Frame) -> Result<Vec<Centroid>, Error> {
        let centroids = self.oracle.centroids(frame)?;
        if centroids.len() != self.config.clusters {
            return Err(cluster::Error::Count {
                want: self.config.clusters,
                got: centroids.len(),
            }
            .into());
        }
        Ok(centroids)
    }

    /// how many records fall to each center
    fn assign(frame: &Frame, centroids: &[Centroid]) -> Vec<usize> {
        if centroids.is_empty() {
            return vec![];
        }
        let mut populations = vec![0usize; centroids.len()];
        frame
            .rows()
            .par_iter()
            .map(|row| cluster::nearest(centroids, row).0)
            .collect::<Vec<usize>>()
            .into_iter()
            .for_each(|nearest| populations[nearest] += 1);
        populations
    }

    /// every record through the bit codec, order preserved
    fn encode(&self, frame: &Frame) -> Result<Vec<crate::codec::Rep>, Error> {
        let schedule = self.config.schedule()?;
        let reverse = self.config.reverse;
        let records = frame.records()?;
        log::info!("{:<32}{:<32}", "encoding records", records.len());
        Ok(records
            .par_iter()
            .map(|values| schedule.encode(values, reverse))
            .collect::<Result<Vec<crate::codec::Rep>, crate::codec::Error>>()?)
    }
}
