use super::Error;
use super::Sink;
use crate::cluster::Centroid;
use crate::codec::Rep;
use crate::Progress;
use std::path::Path;
use std::path::PathBuf;

/// Bit-packed record file for the downstream hardware test bench.
///
/// Layout: magic header, then per record a big-endian u16 bit count
/// followed by the MSB-first packed bytes, then a 0xFFFF trailer.
/// Centers land in a sibling file as big-endian f32 coordinate lists.
pub struct Disk(PathBuf);

impl Disk {
    const MAGIC: &'static [u8] = b"BITPACK\n\0";

    /// sibling path holding the centroid table
    fn centers(&self) -> PathBuf {
        self.0.with_extension("centers")
    }

    /// pull every packed record back into memory as (bits, bytes)
    pub fn read(path: &Path) -> Result<Vec<(usize, Vec<u8>)>, Error> {
        use byteorder::ReadBytesExt;
        use byteorder::BE;
        use std::io::BufReader;
        use std::io::Read;
        let file = std::fs::File::open(path)?;
        let mut reader = BufReader::new(file);
        let mut magic = [0u8; Self::MAGIC.len()];
        reader.read_exact(&mut magic).map_err(|_| Error::Magic)?;
        if magic != Self::MAGIC {
            return Err(Error::Magic);
        }
        let mut records = Vec::new();
        loop {
            let bits = reader.read_u16::<BE>().map_err(|_| Error::Truncated)?;
            if bits == 0xFFFF {
                return Ok(records);
            }
            let mut bytes = vec![0u8; (bits as usize).div_ceil(8)];
            reader.read_exact(&mut bytes).map_err(|_| Error::Truncated)?;
            records.push((bits as usize, bytes));
        }
    }
}

impl From<PathBuf> for Disk {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl Sink for Disk {
    fn rows(&mut self, reps: &[Rep]) -> Result<(), Error> {
        use byteorder::WriteBytesExt;
        use byteorder::BE;
        log::info!("{:<32}{:<32}", "packing rows", self.0.display());
        let ref mut file = std::fs::File::create(&self.0)?;
        std::io::Write::write_all(file, Self::MAGIC)?;
        let mut progress = Progress::new(reps.len(), 10);
        for rep in reps {
            let bits = rep.bits();
            if bits >= 0xFFFF {
                return Err(Error::Record { bits });
            }
            file.write_u16::<BE>(bits as u16)?;
            std::io::Write::write_all(file, &rep.packed())?;
            progress.tick();
        }
        file.write_u16::<BE>(0xFFFF)?;
        Ok(())
    }

    fn centers(&mut self, centroids: &[Centroid]) -> Result<(), Error> {
        use byteorder::WriteBytesExt;
        use byteorder::BE;
        log::info!("{:<32}{:<32}", "packing centroids", Disk::centers(self).display());
        let ref mut file = std::fs::File::create(Disk::centers(self))?;
        std::io::Write::write_all(file, Self::MAGIC)?;
        for centroid in centroids {
            file.write_u16::<BE>(centroid.len() as u16)?;
            for &coordinate in centroid.coordinates() {
                file.write_f32::<BE>(coordinate)?;
            }
        }
        file.write_u16::<BE>(0xFFFF)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Schedule;

    /// Encode sample rows
    /// Write to disk, read back
    /// Clean up
    #[test]
    fn persistence() {
        let path = PathBuf::from("rows.bitpack.test");
        let schedule = Schedule::survey();
        let reps = (0..32)
            .map(|_| schedule.encode(&schedule.sample(), false).unwrap())
            .collect::<Vec<Rep>>();
        Disk::from(path.clone()).rows(&reps).unwrap();
        let records = Disk::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(records.len(), reps.len());
        for ((bits, bytes), rep) in records.iter().zip(reps.iter()) {
            assert_eq!(*bits, rep.bits());
            assert_eq!(*bytes, rep.packed());
        }
    }

    #[test]
    fn refuses_foreign_files() {
        let path = PathBuf::from("rows.magic.test");
        std::fs::write(&path, b"not a packed file").unwrap();
        let result = Disk::read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Magic)));
    }

    #[test]
    fn refuses_truncated_files() {
        use byteorder::WriteBytesExt;
        use byteorder::BE;
        let path = PathBuf::from("rows.truncated.test");
        {
            let mut file = std::fs::File::create(&path).unwrap();
            std::io::Write::write_all(&mut file, Disk::MAGIC).unwrap();
            file.write_u16::<BE>(40).unwrap();
        }
        let result = Disk::read(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(Error::Truncated)));
    }
}
