//! schema.org JSON-LD describing the app.
//!
//! Emitted verbatim into a `<script type="application/ld+json">` on the home
//! page (see [`crate::Route::emits_structured_data`]).

use serde::Serialize;

use crate::error::Result;
use crate::site;

/// `SoftwareApplication` object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SoftwareApplication {
    /// Always `https://schema.org`
    #[serde(rename = "@context")]
    pub context: &'static str,
    /// Always `SoftwareApplication`
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Product name
    pub name: &'static str,
    /// Supported platforms
    #[serde(rename = "operatingSystem")]
    pub operating_system: &'static str,
    /// schema.org application category
    #[serde(rename = "applicationCategory")]
    pub application_category: &'static str,
    /// Pricing
    pub offers: Offer,
    /// Short description
    pub description: &'static str,
    /// Publisher
    pub author: Person,
}

/// `Offer` object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Offer {
    /// Always `Offer`
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Price as a decimal string
    pub price: &'static str,
    /// ISO 4217 currency
    #[serde(rename = "priceCurrency")]
    pub price_currency: &'static str,
}

/// `Person` object.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Person {
    /// Always `Person`
    #[serde(rename = "@type")]
    pub kind: &'static str,
    /// Display name
    pub name: &'static str,
}

impl Default for SoftwareApplication {
    fn default() -> Self {
        SoftwareApplication {
            context: "https://schema.org",
            kind: "SoftwareApplication",
            name: site::PRODUCT_FULL_NAME,
            operating_system: "Android, iOS",
            application_category: "DeveloperApplication",
            offers: Offer {
                kind: "Offer",
                price: "0",
                price_currency: "USD",
            },
            description: "Professional Mobile IDE and Code Editor with desktop-grade syntax highlighting and live preview.",
            author: Person {
                kind: "Person",
                name: "Karthi-Nexgen",
            },
        }
    }
}

impl SoftwareApplication {
    /// Compact JSON, safe to place inside a `<script>` element.
    pub fn to_json_ld(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        // `</script>` inside the payload would end the element early
        Ok(json.replace("</", "<\\/"))
    }

    /// Indented JSON for humans.
    pub fn to_json_ld_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// JSON-LD for the home page.
pub fn home_json_ld() -> Result<String> {
    SoftwareApplication::default().to_json_ld()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn home_json_ld_matches_schema_shape() {
        let parsed: Value = serde_json::from_str(&home_json_ld().unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!({
                "@context": "https://schema.org",
                "@type": "SoftwareApplication",
                "name": "CodeX Mobile IDE",
                "operatingSystem": "Android, iOS",
                "applicationCategory": "DeveloperApplication",
                "offers": {
                    "@type": "Offer",
                    "price": "0",
                    "priceCurrency": "USD"
                },
                "description": "Professional Mobile IDE and Code Editor with desktop-grade syntax highlighting and live preview.",
                "author": {
                    "@type": "Person",
                    "name": "Karthi-Nexgen"
                }
            })
        );
    }

    #[test]
    fn script_terminator_is_escaped() {
        let app = SoftwareApplication {
            description: "bad </script><script>alert(1)</script>",
            ..Default::default()
        };
        let out = app.to_json_ld().unwrap();
        assert!(!out.contains("</script>"));
        let parsed: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["description"], app.description);
    }

    #[test]
    fn pretty_output_is_multiline() {
        let pretty = SoftwareApplication::default().to_json_ld_pretty().unwrap();
        assert!(pretty.lines().count() > 1);
    }
}
