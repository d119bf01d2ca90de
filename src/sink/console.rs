use super::Error;
use super::Sink;
use crate::cluster::Centroid;
use crate::codec::Rep;

/// Log-only sink for quick inspection runs.
#[derive(Debug, Default)]
pub struct Console;

impl Sink for Console {
    fn rows(&mut self, reps: &[Rep]) -> Result<(), Error> {
        log::info!("{:<32}{:<32}", "encoded rows", reps.len());
        if let Some(first) = reps.first() {
            log::info!("{:<32}{}", "first row", first);
        }
        Ok(())
    }
    fn centers(&mut self, centroids: &[Centroid]) -> Result<(), Error> {
        log::info!("{:<32}{:<32}", "centroids", centroids.len());
        Ok(())
    }
}
