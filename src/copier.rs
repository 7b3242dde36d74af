use chrono::NaiveDate;
use elasticsearch::http::StatusCode;

use crate::config::Config;
use crate::error::AppError;
use crate::es::{client, mapping, master};
use crate::models::daily_index::DailyIndices;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--only-master` was given and this host is not the cluster master.
    NotMaster,
    Copied {
        from: String,
        to: String,
        status: StatusCode,
    },
}

/// Copy the mapping type of today's index into tomorrow's, creating it first.
pub async fn run(config: &Config, today: NaiveDate) -> Result<Outcome, AppError> {
    let es = client::create_client(config)?;

    if config.only_master && !master::is_master(&es, &config.host, config.port).await? {
        tracing::info!("Not the cluster master. Exiting.");
        return Ok(Outcome::NotMaster);
    }

    let indices = DailyIndices::for_date(&config.index_prefix, today)?;
    tracing::info!(
        "Copying mapping type '{}' from {} to {}",
        config.mapping_type,
        indices.today,
        indices.tomorrow
    );

    client::ensure_index(&es, &indices.tomorrow).await?;

    let fetched = mapping::fetch_mapping(&es, &indices.today).await?;
    let source = mapping::extract_mapping(fetched, &indices.today, &config.mapping_type)?;

    let status =
        mapping::put_mapping(&es, &indices.tomorrow, &config.mapping_type, &source).await?;

    Ok(Outcome::Copied {
        from: indices.today,
        to: indices.tomorrow,
        status,
    })
}

/// Process exit status for a finished run: 0 for a copy or a skip, 1 for any error.
pub fn exit_status(result: &Result<Outcome, AppError>) -> u8 {
    match result {
        Ok(Outcome::Copied { .. }) | Ok(Outcome::NotMaster) => 0,
        Err(_) => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_and_skip_exit_zero() {
        let copied = Ok(Outcome::Copied {
            from: "logstash-2024.03.10".to_string(),
            to: "logstash-2024.03.11".to_string(),
            status: StatusCode::OK,
        });
        assert_eq!(exit_status(&copied), 0);
        assert_eq!(exit_status(&Ok(Outcome::NotMaster)), 0);
    }

    #[test]
    fn errors_exit_one() {
        let lookup = Err(AppError::MasterLookup {
            status_code: 503,
            details: String::new(),
        });
        assert_eq!(exit_status(&lookup), 1);

        let put = Err(AppError::PutMapping {
            index: "logstash-2024.03.11".to_string(),
            mapping_type: "log".to_string(),
            status_code: 400,
            details: String::new(),
        });
        assert_eq!(exit_status(&put), 1);
    }
}
