use crate::config::toml_config::LibraryConfig;
use crate::domain::model::Periodicity;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "library-archive")]
#[command(about = "Manage a small library catalog stored in a binary archive")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the archive (overrides archive.data_dir)
    #[arg(long)]
    pub data_dir: Option<String>,

    /// Archive file name inside the data directory (overrides archive.file_name)
    #[arg(long)]
    pub archive_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Seed a sample catalog, query it, save it and load it back
    Demo {
        /// Evaluate overdue loans as of this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// List every item in the archive
    List,
    /// Find the first item with this ISBN
    FindIsbn { isbn: String },
    /// Find all items published in a year
    FindYear { year: i32 },
    /// Find all books by an author (exact match)
    FindAuthor { author: String },
    /// Add a book and save the archive
    AddBook {
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        author: String,
        #[arg(long, default_value = "")]
        genre: String,
        #[arg(long, default_value = "0")]
        pages: u32,
    },
    /// Add a magazine and save the archive
    AddMagazine {
        #[arg(long)]
        isbn: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        issue: u32,
        /// weekly, monthly or semiannual
        #[arg(long)]
        periodicity: Periodicity,
    },
    /// Remove every item with this ISBN and save the archive
    Remove { isbn: String },
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_overrides(&self, config: &mut LibraryConfig) {
        if let Some(data_dir) = &self.data_dir {
            config.archive.data_dir = data_dir.clone();
        }
        if let Some(archive_file) = &self.archive_file {
            config.archive.file_name = archive_file.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_magazine() {
        let cli = CliConfig::try_parse_from([
            "library-archive",
            "--data-dir",
            "/tmp/lib",
            "add-magazine",
            "--isbn",
            "123-456-789",
            "--title",
            "National Geographic",
            "--year",
            "2024",
            "--issue",
            "4",
            "--periodicity",
            "monthly",
        ])
        .unwrap();

        match cli.command {
            Command::AddMagazine {
                periodicity, issue, ..
            } => {
                assert_eq!(periodicity, Periodicity::Monthly);
                assert_eq!(issue, 4);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = CliConfig::try_parse_from([
            "library-archive",
            "--data-dir",
            "/tmp/lib",
            "--archive-file",
            "other.dat",
            "list",
        ])
        .unwrap();

        let mut config = LibraryConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.archive.data_dir, "/tmp/lib");
        assert_eq!(config.archive.file_name, "other.dat");
    }

    #[test]
    fn test_parse_demo_date() {
        let cli = CliConfig::try_parse_from(["library-archive", "demo", "--today", "2024-05-02"])
            .unwrap();

        match cli.command {
            Command::Demo { today } => {
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 5, 2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_periodicity() {
        let result = CliConfig::try_parse_from([
            "library-archive",
            "add-magazine",
            "--isbn",
            "X",
            "--title",
            "Y",
            "--year",
            "2024",
            "--issue",
            "1",
            "--periodicity",
            "daily",
        ]);
        assert!(result.is_err());
    }
}
