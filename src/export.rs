use crate::error::{Error, Result};
use crate::series::TrendDataset;
use serde_json::json;
use std::fs::File;
use std::io::Write;

pub fn export_to_csv(dataset: &TrendDataset, path: &str) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "index,exponent,difference")?;

    for i in 0..dataset.len() {
        let difference = dataset.differences[i]
            .map(|d| d.to_string())
            .unwrap_or_default();
        writeln!(
            file,
            "{},{},{}",
            dataset.indices[i], dataset.exponents[i], difference
        )?;
    }

    Ok(())
}

pub fn export_to_json(dataset: &TrendDataset, path: &str) -> Result<()> {
    let rows: Vec<_> = (0..dataset.len())
        .map(|i| {
            json!({
                "index": dataset.indices[i],
                "exponent": dataset.exponents[i],
                "difference": dataset.differences[i],
            })
        })
        .collect();

    let output = json!({ "series": rows });

    let json_str = serde_json::to_string_pretty(&output)
        .map_err(|e| Error::Config(format!("Failed to serialize JSON: {}", e)))?;

    let mut file = File::create(path)?;
    file.write_all(json_str.as_bytes())?;

    Ok(())
}

/// Picks the format from the file extension; anything but `.json` is CSV.
pub fn export_dataset(dataset: &TrendDataset, path: &str) -> Result<()> {
    if path.ends_with(".json") {
        export_to_json(dataset, path)
    } else {
        export_to_csv(dataset, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_has_blank_difference_on_first_row() {
        let ds = TrendDataset::from_exponents(vec![2, 3, 5]);
        let path = std::env::temp_dir().join("mersenne_export.csv");
        export_to_csv(&ds, path.to_str().unwrap()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "index,exponent,difference");
        assert_eq!(lines[1], "1,2,");
        assert_eq!(lines[2], "2,3,1");
        assert_eq!(lines[3], "3,5,2");
    }

    #[test]
    fn test_json_has_null_difference_on_first_row() {
        let ds = TrendDataset::from_exponents(vec![2, 3]);
        let path = std::env::temp_dir().join("mersenne_export.json");
        export_to_json(&ds, path.to_str().unwrap()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let series = parsed["series"].as_array().unwrap();
        assert_eq!(series.len(), 2);
        assert!(series[0]["difference"].is_null());
        assert_eq!(series[1]["difference"], 1);
    }

    #[test]
    fn test_extension_selects_format() {
        let ds = TrendDataset::from_exponents(vec![2, 3]);
        let path = std::env::temp_dir().join("mersenne_export_sel.json");
        export_dataset(&ds, path.to_str().unwrap()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
    }
}
