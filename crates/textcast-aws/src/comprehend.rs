//! Amazon Comprehend document classification.

use aws_config::SdkConfig;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::types::{DocumentClass, DocumentLabel};
use textcast_config::AnalysisConfig;
use textcast_core::{AnalysisResult, Category};

use crate::{AnalysisError, TextAnalyzer};

/// [`TextAnalyzer`] backed by a Comprehend custom classifier endpoint.
#[derive(Debug, Clone)]
pub struct ComprehendAnalyzer {
    client: aws_sdk_comprehend::Client,
    endpoint_arn: String,
}

impl ComprehendAnalyzer {
    /// Build the client. `config.index_id` is the classifier endpoint ARN.
    #[must_use]
    pub fn new(sdk: &SdkConfig, config: &AnalysisConfig) -> Self {
        Self {
            client: aws_sdk_comprehend::Client::new(sdk),
            endpoint_arn: config.index_id.trim().to_owned(),
        }
    }

    #[must_use]
    pub fn endpoint_arn(&self) -> &str {
        &self.endpoint_arn
    }
}

impl TextAnalyzer for ComprehendAnalyzer {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        let output = self
            .client
            .classify_document()
            .text(text)
            .endpoint_arn(&self.endpoint_arn)
            .send()
            .await
            .map_err(|error| AnalysisError::Service(DisplayErrorContext(&error).to_string()))?;

        Ok(AnalysisResult {
            categories: categories_from(output.classes(), output.labels()),
        })
    }
}

/// Flatten multi-class and multi-label responses into one category list.
///
/// Entries without a name carry no information and are dropped.
fn categories_from(classes: &[DocumentClass], labels: &[DocumentLabel]) -> Vec<Category> {
    let classes = classes.iter().filter_map(|class| {
        class.name().map(|name| Category {
            name: name.to_owned(),
            score: class.score(),
        })
    });
    let labels = labels.iter().filter_map(|label| {
        label.name().map(|name| Category {
            name: name.to_owned(),
            score: label.score(),
        })
    });
    classes.chain(labels).collect()
}

#[cfg(test)]
mod tests {
    use aws_config::{BehaviorVersion, Region};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classes_and_labels_are_merged_in_order() {
        let classes = vec![
            DocumentClass::builder().name("invoice").score(0.91).build(),
            DocumentClass::builder().score(0.05).build(),
        ];
        let labels = vec![DocumentLabel::builder().name("finance").build()];

        let categories = categories_from(&classes, &labels);

        assert_eq!(
            categories,
            vec![
                Category {
                    name: "invoice".into(),
                    score: Some(0.91),
                },
                Category {
                    name: "finance".into(),
                    score: None,
                },
            ]
        );
    }

    #[test]
    fn empty_response_yields_no_categories() {
        assert!(categories_from(&[], &[]).is_empty());
    }

    #[test]
    fn endpoint_arn_is_trimmed() {
        let sdk = SdkConfig::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        let analyzer = ComprehendAnalyzer::new(
            &sdk,
            &AnalysisConfig {
                index_id: " arn:aws:comprehend:us-east-1:1:document-classifier-endpoint/docs\n"
                    .into(),
            },
        );
        assert_eq!(
            analyzer.endpoint_arn(),
            "arn:aws:comprehend:us-east-1:1:document-classifier-endpoint/docs"
        );
    }
}
