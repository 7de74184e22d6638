//! Dashboard tiles

use super::{id_field, int_field, str_field};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub id: String,
    pub title: Option<String>,
    pub embed_url: Option<String>,
    pub embed_data: Option<String>,
    pub row_span: Option<i64>,
    pub col_span: Option<i64>,
    pub report_id: Option<String>,
    pub dataset_id: Option<String>,
}

impl From<&Value> for Tile {
    fn from(value: &Value) -> Self {
        Self {
            id: id_field(value, "id"),
            title: str_field(value, "title"),
            embed_url: str_field(value, "embedUrl"),
            embed_data: str_field(value, "embedData"),
            row_span: int_field(value, "rowSpan"),
            col_span: int_field(value, "colSpan"),
            report_id: str_field(value, "reportId"),
            dataset_id: str_field(value, "datasetId"),
        }
    }
}

entity!(Tile, "tile");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tile_from_raw() {
        let tile = Tile::from_raw(&json!({
            "id": "312fbfe9-2eda-44e0-9ed0-ab5dc571bb4b",
            "title": "SalesMarketingTile",
            "embedUrl": "https://app.powerbi.com/embed?dashboardId=69ffaa6c-b36d-4d01-96f5-1ed67c64d4af&tileId=312fbfe9-2eda-44e0-9ed0-ab5dc571bb4b",
            "rowSpan": 0,
            "colSpan": 0,
            "reportId": "5b218778-e7a5-4d73-8187-f10824047715",
            "datasetId": "cfafbeb1-8037-4d0c-896e-a46fb27ff229"
        }));

        assert_eq!(tile.title.as_deref(), Some("SalesMarketingTile"));
        assert_eq!(tile.row_span, Some(0));
        assert_eq!(tile.col_span, Some(0));
        assert_eq!(tile.report_id.as_deref(), Some("5b218778-e7a5-4d73-8187-f10824047715"));
        assert_eq!(tile.embed_data, None);
    }
}
