use crate::depth::ProcessorParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct DepthMaskToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub processor: ProcessorParams,
    pub output: DepthMaskOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct DepthMaskOutputConfig {
    #[serde(rename = "mask_image")]
    pub mask_image: PathBuf,
    #[serde(rename = "preview_image", default)]
    pub preview_image: Option<PathBuf>,
    #[serde(rename = "report_json")]
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<DepthMaskToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<DepthMaskToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::BorderMode;

    #[test]
    fn processor_section_is_optional() {
        let cfg = parse_config(
            r#"{"input": "d.png", "output": {"mask_image": "m.png", "report_json": "r.json"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.processor, ProcessorParams::default());
        assert!(cfg.output.preview_image.is_none());
    }

    #[test]
    fn processor_overrides_are_read() {
        let cfg = parse_config(
            r#"{
                "input": "d.png",
                "processor": {"gradientBorder": "reflect101", "gradientBias": 0},
                "output": {"mask_image": "m.png", "preview_image": "p.png", "report_json": "r.json"}
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.processor.gradient_border, BorderMode::Reflect101);
        assert_eq!(cfg.processor.gradient_bias, 0);
        assert_eq!(cfg.output.preview_image, Some(PathBuf::from("p.png")));
    }
}
