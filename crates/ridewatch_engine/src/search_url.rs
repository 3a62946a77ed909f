use url::Url;

/// Marker replaced by the search date.
pub const DATE_PLACEHOLDER: &str = "{date}";

/// Faridabad to JIIT Noida, one seat, sorted by departure, morning departures
/// from verified drivers with at most two in the back seat.
pub const DEFAULT_SEARCH_TEMPLATE: &str = concat!(
    "https://www.blablacar.in/search",
    "?fn=108%2C+108%2C+Block+D%2C+SGM+Nagar%2C+New+Industrial+Township%2C+Faridabad%2C+Haryana",
    "&tn=JAYPEE+INSTITUTE+OF+INFORMATION+TECHNOLOGY%2C+A+10%2C+A+Block%2C+Block+A%2C",
    "+Industrial+Area%2C+Sector+62%2C+Noida%2C+Uttar+Pradesh",
    "&db={date}",
    "&seats=1",
    "&search_origin=SEARCH",
    "&from_place_id=eyJpIjoiQ2hJSkItejZhZGZkRERrUkMzYWZTb0EyMXZvIiwicCI6MSwidiI6MSwidCI6WzJdfQ%3D%3D",
    "&to_place_id=eyJpIjoiQ2hJSjV6d2JTVkhsRERrUnNKMU5fZnpaTlhNIiwicCI6MSwidiI6MSwidCI6WzEsMl19",
    "&sort=dep_time%3Aasc",
    "&dep_6_12=true",
    "&verified_id=true",
    "&2_max_back=true",
);

const PROBE_DATE: &str = "2000-01-01";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlTemplateError {
    #[error("search template must contain `{{date}}` exactly once (found {0})")]
    Placeholder(usize),
    #[error("search template is not a valid absolute url: {0}")]
    InvalidUrl(String),
}

/// Builds search URLs by substituting a date into a fixed template.
#[derive(Debug, Clone)]
pub struct SearchUrlBuilder {
    prefix: String,
    suffix: String,
}

impl Default for SearchUrlBuilder {
    fn default() -> Self {
        Self::split(DEFAULT_SEARCH_TEMPLATE)
    }
}

impl SearchUrlBuilder {
    pub fn with_template(template: &str) -> Result<Self, UrlTemplateError> {
        let count = template.matches(DATE_PLACEHOLDER).count();
        if count != 1 {
            return Err(UrlTemplateError::Placeholder(count));
        }
        let builder = Self::split(template);
        Url::parse(&builder.build(PROBE_DATE))
            .map_err(|err| UrlTemplateError::InvalidUrl(err.to_string()))?;
        Ok(builder)
    }

    fn split(template: &str) -> Self {
        let (prefix, suffix) = template
            .split_once(DATE_PLACEHOLDER)
            .unwrap_or((template, ""));
        Self {
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    /// The date is inserted verbatim; callers pass `YYYY-MM-DD`.
    pub fn build(&self, date: &str) -> String {
        format!("{}{}{}", self.prefix, date, self.suffix)
    }
}
