use crate::startup::AppState;
use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};
use service_core::error::AppError;

/// Status page: how many people are stored, and when the page was rendered.
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let count = state.repository.count().await?;
    Ok(Html(render_info(count, Utc::now())))
}

pub fn render_info(count: u64, now: DateTime<Utc>) -> String {
    format!(
        "<p>Phonebook has info for {} people.</p>\n<p>{}</p>\n",
        count,
        now.format("%a %b %d %Y %H:%M:%S GMT%z")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_count_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        assert_eq!(
            render_info(2, now),
            "<p>Phonebook has info for 2 people.</p>\n<p>Sat Mar 09 2024 14:05:00 GMT+0000</p>\n"
        );
    }
}
