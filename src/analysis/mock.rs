//! Fixed-output analyzer used until a real vision backend is wired in

use async_trait::async_trait;

use super::{Analyzer, Detection, Upload};
use crate::Result;

/// Species reported for every image (the vision step would say "dog")
pub const MOCK_SPECIES: &str = "강아지";

/// Action reported for every image (the vision step would say "walking")
pub const MOCK_ACTION: &str = "산책 중";

/// Analyzer that ignores the image and returns constant detections
#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalyzer;

#[async_trait]
impl Analyzer for MockAnalyzer {
    async fn detect(&self, _upload: &Upload) -> Result<Detection> {
        Ok(Detection {
            species: MOCK_SPECIES.to_string(),
            action: MOCK_ACTION.to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_ignores_upload() {
        let png = Upload::new("cat.png").with_content_type("image/png");
        let empty = Upload::new("");

        let a = MockAnalyzer.detect(&png).await.unwrap();
        let b = MockAnalyzer.detect(&empty).await.unwrap();

        assert_eq!(a, b);
        assert_eq!(a.species, MOCK_SPECIES);
        assert_eq!(a.action, MOCK_ACTION);
    }
}
