use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use tracing::debug;

use crate::model::dashboard::DashboardRecord;
use crate::repository::traits::DashboardRepository;

const DASHBOARD_FILE_NAME: &str = "dashboard.json";

#[derive(Clone)]
pub struct FileDashboardRepository {
    file_path: PathBuf,
}

impl FileDashboardRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".pulpboard")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DASHBOARD_FILE_NAME);

        // Initialize a fresh store with an empty array
        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<DashboardRecord>::new())?;
            writer.flush()?;
        }

        Ok(FileDashboardRepository { file_path: path })
    }

    fn read_records(&self) -> Result<Vec<DashboardRecord>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let records = serde_json::from_reader(reader)?;
        Ok(records)
    }

    fn write_records(&self, records: &[DashboardRecord]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, records)?;
        writer.flush()?;
        Ok(())
    }
}

impl DashboardRepository for FileDashboardRepository {
    fn find_all(&self) -> Result<Vec<DashboardRecord>> {
        self.read_records()
    }

    fn find_by_month(&self, month: &str) -> Result<Option<DashboardRecord>> {
        let records = self.read_records()?;
        Ok(records.into_iter().find(|r| r.month == month))
    }

    fn save(&self, record: DashboardRecord) -> Result<DashboardRecord> {
        let mut records = self.read_records()?;
        if let Some(pos) = records.iter().position(|r| r.month == record.month) {
            debug!(month = %record.month, "replacing dashboard record");
            records[pos] = record.clone();
        } else {
            debug!(month = %record.month, "inserting dashboard record");
            records.push(record.clone());
        }
        self.write_records(&records)?;
        Ok(record)
    }
}
