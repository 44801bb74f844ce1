//! Job posting data structure.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job posting as returned by the jobs API.
///
/// Every field is optional on the wire. Numeric fields accept JSON numbers or
/// numeric strings and decode to `None` for anything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Job {
    /// Posting identifier (string or number upstream)
    #[serde(default, deserialize_with = "lenient::id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Job title
    #[serde(default)]
    pub job_title: String,

    /// Hiring company
    #[serde(default)]
    pub company: String,

    /// Free-form location text
    #[serde(default)]
    pub location: String,

    /// Whether the job can be done remotely
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_remote: bool,

    /// Lower salary bound
    #[serde(default, deserialize_with = "lenient::number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,

    /// Upper salary bound
    #[serde(default, deserialize_with = "lenient::number")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,

    /// Contract type, e.g. `permanent` or `contract`
    #[serde(default, deserialize_with = "lenient::text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_type: Option<String>,

    /// Contract hours, e.g. `full_time` or `part_time`
    #[serde(default, deserialize_with = "lenient::text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_time: Option<String>,

    /// Posting timestamp as sent by the API
    #[serde(default, deserialize_with = "lenient::text")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,

    /// Outbound link to the advert
    #[serde(default)]
    pub redirect_url: String,
}

impl Job {
    /// Parsed posting time, if `date_posted` is present and readable.
    pub fn posted_at(&self) -> Option<DateTime<Utc>> {
        self.date_posted.as_deref().and_then(parse_timestamp)
    }

    /// Stable render key: the job id, or its position in the list.
    pub fn key(&self, index: usize) -> String {
        self.id.clone().unwrap_or_else(|| index.to_string())
    }

    /// Salary line, e.g. `£20000 - £25000 Per Year`.
    pub fn salary_label(&self) -> String {
        let min = self.salary_min.map(format_amount).unwrap_or_default();
        match self.salary_max {
            Some(max) => format!("£{} - £{} Per Year", min, format_amount(max)),
            None => format!("£{} - £", min),
        }
    }

    /// Human-readable contract type.
    pub fn contract_type_label(&self) -> Option<String> {
        self.contract_type.as_deref().map(|t| {
            match t {
                "permanent" => "Permanent",
                "contract" => "Contract",
                other => other,
            }
            .to_string()
        })
    }

    /// Human-readable contract hours.
    pub fn hours_label(&self) -> Option<String> {
        self.contract_time.as_deref().map(|t| {
            match t {
                "part_time" => "Part Time",
                "full_time" => "Full Time",
                other => other,
            }
            .to_string()
        })
    }

    /// `Posted YYYY-MM-DD`, falling back to the raw value when unparseable.
    pub fn posted_label(&self) -> Option<String> {
        let raw = self.date_posted.as_deref()?;
        let shown = match parse_timestamp(raw) {
            Some(ts) => ts.format("%Y-%m-%d").to_string(),
            None => raw.to_string(),
        };
        Some(format!("Posted {}", shown))
    }

    /// Format the job for display using a template.
    ///
    /// Supported placeholders:
    /// - `{title}`, `{company}`, `{location}`, `{salary}`
    /// - `{contract_type}`, `{hours}`, `{posted}`, `{link}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{title}", &self.job_title)
            .replace("{company}", &self.company)
            .replace("{location}", &self.location)
            .replace("{salary}", &self.salary_label())
            .replace(
                "{contract_type}",
                &self.contract_type_label().unwrap_or_default(),
            )
            .replace("{hours}", &self.hours_label().unwrap_or_default())
            .replace("{posted}", &self.posted_label().unwrap_or_default())
            .replace("{link}", &self.redirect_url)
    }
}

impl AsRef<Job> for Job {
    fn as_ref(&self) -> &Job {
        self
    }
}

/// Parse a `date_posted` value.
///
/// Accepts RFC 3339, RFC 2822, an ISO datetime with a `+HHMM` offset, a naive
/// `YYYY-MM-DD[T ]HH:MM:SS[.fff]` (read as UTC) or a bare `YYYY-MM-DD`
/// (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let zoned = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_rfc2822(raw))
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"));
    if let Ok(ts) = zoned {
        return Some(ts.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"));
    if let Ok(naive) = naive {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Tolerant field decoders for upstream data of uneven quality.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        let parsed = match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|v| v.is_finite()))
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true") || s.trim() == "1",
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            _ => false,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Option::<Value>::deserialize(d)?;
        Ok(match value {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }
}
