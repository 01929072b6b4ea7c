//! The lead record returned by the search service
//!
//! Deployments disagree on field names (English in the v1 API, Italian in the
//! older `/imprese-senza-sito` service), so every field accepts each spelling.
//! Leads are read-only once received.

use serde::{Deserialize, Serialize};

/// One business returned by a search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLead")]
pub struct Lead {
  pub business_name: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub address: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub detected_url: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub current_status: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub sales_pitch: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub region: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub postal_code: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,
}

/// Wire shape with one slot per spelling, so a record may carry several
/// spellings of the same field at once.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLead {
  business_name: Option<String>,
  nome: Option<String>,
  name: Option<String>,

  address: Option<String>,
  indirizzo: Option<String>,

  phone: Option<String>,
  telefono: Option<String>,

  detected_url: Option<String>,
  sito: Option<String>,
  website: Option<String>,

  current_status: Option<String>,

  messaggio_personalizzato: Option<String>,
  messaggio: Option<String>,
  sales_pitch: Option<String>,

  email: Option<String>,

  city: Option<String>,
  #[serde(rename = "città")]
  citta_accented: Option<String>,
  citta: Option<String>,

  region: Option<String>,
  regione: Option<String>,

  postal_code: Option<String>,
  cap: Option<String>,

  country: Option<String>,
  paese: Option<String>,
}

/// First non-blank candidate in precedence order, else the first one given
fn pick<const N: usize>(candidates: [Option<String>; N]) -> Option<String> {
  let mut fallback = None;
  for value in candidates.into_iter().flatten() {
    if !value.trim().is_empty() {
      return Some(value);
    }
    fallback.get_or_insert(value);
  }
  fallback
}

impl TryFrom<RawLead> for Lead {
  type Error = String;

  fn try_from(raw: RawLead) -> Result<Self, Self::Error> {
    let business_name = pick([raw.business_name, raw.nome, raw.name])
      .ok_or_else(|| "missing field `business_name`".to_string())?;

    Ok(Self {
      business_name,
      address: pick([raw.address, raw.indirizzo]),
      phone: pick([raw.phone, raw.telefono]),
      detected_url: pick([raw.detected_url, raw.sito, raw.website]),
      current_status: raw.current_status,
      sales_pitch: pick([raw.messaggio_personalizzato, raw.messaggio, raw.sales_pitch]),
      email: raw.email,
      city: pick([raw.city, raw.citta_accented, raw.citta]),
      region: pick([raw.region, raw.regione]),
      postal_code: pick([raw.postal_code, raw.cap]),
      country: pick([raw.country, raw.paese]),
    })
  }
}

/// Website status reported by the service. Only affects badge colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadStatus {
  NoWebsite,
  DirectoryOnly,
  Other(String),
  Unset,
}

impl LeadStatus {
  pub fn label(&self) -> &str {
    match self {
      LeadStatus::NoWebsite => "No Website",
      LeadStatus::DirectoryOnly => "Directory Only",
      LeadStatus::Other(label) => label,
      LeadStatus::Unset => "NO_DATA",
    }
  }
}

impl From<Option<&str>> for LeadStatus {
  fn from(raw: Option<&str>) -> Self {
    match raw.map(str::trim) {
      None | Some("") => LeadStatus::Unset,
      Some("No Website") => LeadStatus::NoWebsite,
      Some("Directory Only") => LeadStatus::DirectoryOnly,
      Some(other) => LeadStatus::Other(other.to_string()),
    }
  }
}

fn present(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|value| !value.trim().is_empty())
}

impl Lead {
  pub fn new(business_name: impl Into<String>) -> Self {
    Self {
      business_name: business_name.into(),
      address: None,
      phone: None,
      detected_url: None,
      current_status: None,
      sales_pitch: None,
      email: None,
      city: None,
      region: None,
      postal_code: None,
      country: None,
    }
  }

  pub fn status(&self) -> LeadStatus {
    LeadStatus::from(self.current_status.as_deref())
  }

  pub fn address(&self) -> Option<&str> {
    present(&self.address)
  }

  pub fn phone(&self) -> Option<&str> {
    present(&self.phone)
  }

  pub fn website(&self) -> Option<&str> {
    present(&self.detected_url)
  }

  pub fn sales_pitch(&self) -> Option<&str> {
    present(&self.sales_pitch)
  }

  pub fn email(&self) -> Option<&str> {
    present(&self.email)
  }

  /// "20100 Milano, Lombardia, Italia" from whichever locality parts exist.
  pub fn locality(&self) -> Option<String> {
    let town = match (present(&self.postal_code), present(&self.city)) {
      (Some(cap), Some(city)) => Some(format!("{cap} {city}")),
      (Some(cap), None) => Some(cap.to_string()),
      (None, Some(city)) => Some(city.to_string()),
      (None, None) => None,
    };

    let region = present(&self.region).map(String::from);
    let country = present(&self.country).map(String::from);
    let parts: Vec<String> = [town, region, country].into_iter().flatten().collect();

    if parts.is_empty() {
      None
    } else {
      Some(parts.join(", "))
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_deserialize_english_fields() {
    let lead: Lead = serde_json::from_value(json!({
      "business_name": "Acme",
      "address": "Via Roma 1",
      "phone": "123",
      "detected_url": "https://acme.example",
      "current_status": "Directory Only",
      "sales_pitch": "Hello Acme"
    }))
    .unwrap();

    assert_eq!(lead.business_name, "Acme");
    assert_eq!(lead.address(), Some("Via Roma 1"));
    assert_eq!(lead.phone(), Some("123"));
    assert_eq!(lead.website(), Some("https://acme.example"));
    assert_eq!(lead.status(), LeadStatus::DirectoryOnly);
    assert_eq!(lead.sales_pitch(), Some("Hello Acme"));
  }

  #[test]
  fn test_deserialize_italian_fields() {
    let lead: Lead = serde_json::from_value(json!({
      "nome": "Trattoria da Mario",
      "sito": null,
      "telefono": "02 1234567",
      "email": null,
      "indirizzo": "Corso Buenos Aires 10",
      "città": "Milano",
      "regione": "Lombardia",
      "cap": "20124",
      "paese": "Italia",
      "messaggio": "Gentile Mario"
    }))
    .unwrap();

    assert_eq!(lead.business_name, "Trattoria da Mario");
    assert_eq!(lead.website(), None);
    assert_eq!(lead.phone(), Some("02 1234567"));
    assert_eq!(lead.address(), Some("Corso Buenos Aires 10"));
    assert_eq!(lead.sales_pitch(), Some("Gentile Mario"));
    assert_eq!(lead.locality().as_deref(), Some("20124 Milano, Lombardia, Italia"));
    assert_eq!(lead.status(), LeadStatus::Unset);
  }

  #[test]
  fn test_personalized_message_alias() {
    let lead: Lead =
      serde_json::from_value(json!({"nome": "Bar", "messaggio_personalizzato": "Ciao"})).unwrap();
    assert_eq!(lead.sales_pitch(), Some("Ciao"));
  }

  #[test]
  fn test_both_message_keys_prefer_personalized() {
    let lead: Lead = serde_json::from_value(json!({
      "nome": "Bar",
      "messaggio": "generic",
      "messaggio_personalizzato": "custom"
    }))
    .unwrap();
    assert_eq!(lead.sales_pitch(), Some("custom"));

    let lead: Lead = serde_json::from_value(json!({
      "business_name": "Bar",
      "sales_pitch": "english",
      "messaggio": "italiano"
    }))
    .unwrap();
    assert_eq!(lead.sales_pitch(), Some("italiano"));
  }

  #[test]
  fn test_duplicate_spellings_resolve_in_order() {
    let lead: Lead = serde_json::from_value(json!({
      "business_name": "Acme Srl",
      "nome": "Acme",
      "name": "ACME",
      "detected_url": "https://acme.example",
      "sito": "acme.it",
      "website": "www.acme.it",
      "city": "Milano",
      "città": "Roma",
      "citta": "Napoli",
      "phone": "123",
      "telefono": "456"
    }))
    .unwrap();

    assert_eq!(lead.business_name, "Acme Srl");
    assert_eq!(lead.website(), Some("https://acme.example"));
    assert_eq!(lead.city.as_deref(), Some("Milano"));
    assert_eq!(lead.phone(), Some("123"));
  }

  #[test]
  fn test_blank_spelling_falls_through() {
    let lead: Lead = serde_json::from_value(json!({
      "nome": "Bar",
      "messaggio_personalizzato": "  ",
      "messaggio": "Gentile titolare",
      "sito": null,
      "website": "bar.it"
    }))
    .unwrap();
    assert_eq!(lead.sales_pitch(), Some("Gentile titolare"));
    assert_eq!(lead.website(), Some("bar.it"));
  }

  #[test]
  fn test_empty_strings_count_as_absent() {
    let lead: Lead =
      serde_json::from_value(json!({"business_name": "Acme", "address": "", "phone": "  "}))
        .unwrap();
    assert_eq!(lead.address(), None);
    assert_eq!(lead.phone(), None);
    assert_eq!(lead.locality(), None);
  }

  #[test]
  fn test_missing_name_is_rejected() {
    let result: Result<Lead, _> = serde_json::from_value(json!({"phone": "123"}));
    assert!(result.is_err());
  }

  #[test]
  fn test_status_labels() {
    assert_eq!(LeadStatus::from(Some("No Website")), LeadStatus::NoWebsite);
    assert_eq!(LeadStatus::from(Some("")), LeadStatus::Unset);
    assert_eq!(LeadStatus::from(Some("Parked")).label(), "Parked");
    assert_eq!(LeadStatus::Unset.label(), "NO_DATA");
  }

  #[test]
  fn test_serialize_skips_absent_fields() {
    let mut lead = Lead::new("Acme");
    lead.phone = Some("123".to_string());
    let value = serde_json::to_value(&lead).unwrap();
    assert_eq!(value, json!({"business_name": "Acme", "phone": "123"}));
  }
}
