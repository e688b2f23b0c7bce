//! Query builder for the PostgREST data API.
//!
//! Builds the request URL from a table name plus filter/order/limit parameters and
//! executes it with the fetch API. URL construction is pure so the request shapes
//! can be tested without a network; the terminal operations are only compiled for
//! the web renderer.

use super::config::Config;

#[cfg(feature = "web")]
use super::error::Error;

/// Sort direction for an `order` parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A single pending request against one backend table.
///
/// Filters follow PostgREST operator syntax (`column=eq.value`). All parameters
/// combine with logical AND on the server, matching how the screens compose them.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    config: Config,
    bearer: String,
    table: String,
    params: Vec<(String, String)>,
}

impl QueryBuilder {
    pub(crate) fn new(config: Config, bearer: String, table: &str) -> Self {
        Self {
            config,
            bearer,
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    /// Chooses the returned columns, including embedded joins
    /// (e.g. `*,owners(*)` embeds each pet's owner row).
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".into(), columns.into()));
        self
    }

    /// `column = value` filter.
    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.into(), format!("eq.{}", value.to_string())));
        self
    }

    /// `column >= value` filter.
    pub fn gte(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.into(), format!("gte.{}", value.to_string())));
        self
    }

    /// `column < value` filter.
    pub fn lt(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.into(), format!("lt.{}", value.to_string())));
        self
    }

    /// `column <= value` filter.
    pub fn lte(mut self, column: &str, value: impl ToString) -> Self {
        self.params
            .push((column.into(), format!("lte.{}", value.to_string())));
        self
    }

    /// `column IN (values)` filter.
    pub fn in_list<I, S>(mut self, column: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let list = values
            .into_iter()
            .map(|v| v.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.params.push((column.into(), format!("in.({list})")));
        self
    }

    /// Orders the result set by a natural key.
    pub fn order(mut self, column: &str, direction: Order) -> Self {
        let suffix = match direction {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        };
        self.params
            .push(("order".into(), format!("{column}.{suffix}")));
        self
    }

    /// Caps the number of returned rows.
    pub fn limit(mut self, count: u32) -> Self {
        self.params.push(("limit".into(), count.to_string()));
        self
    }

    /// The request URL this builder resolves to.
    pub fn url(&self) -> String {
        let mut url = format!("{}/rest/v1/{}", self.config.url, self.table);
        if !self.params.is_empty() {
            let query = self
                .params
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}

#[cfg(feature = "web")]
impl QueryBuilder {
    /// Fetches the matching rows.
    pub async fn fetch<T: serde::de::DeserializeOwned>(self) -> Result<Vec<T>, Error> {
        let response = self
            .request(reqwasm::http::Method::GET)
            .send()
            .await
            .map_err(Error::from)?;
        Self::check(&response).await?;

        response
            .json::<Vec<T>>()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Counts the matching rows without transferring them.
    pub async fn count(self) -> Result<u64, Error> {
        let response = self
            .request(reqwasm::http::Method::HEAD)
            .header("Prefer", "count=exact")
            .send()
            .await
            .map_err(Error::from)?;
        Self::check(&response).await?;

        let range = response
            .headers()
            .get("content-range")
            .ok_or_else(|| Error::Decode("missing content-range header".into()))?;
        parse_content_range(&range).ok_or_else(|| Error::Decode(format!("bad content-range: {range}")))
    }

    /// Inserts one row.
    pub async fn insert<T: serde::Serialize>(self, payload: &T) -> Result<(), Error> {
        let body =
            serde_json::to_string(payload).map_err(|e| Error::Decode(e.to_string()))?;
        let response = self
            .request(reqwasm::http::Method::POST)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(Error::from)?;
        Self::check(&response).await
    }

    /// Updates the rows selected by the accumulated filters.
    pub async fn update<T: serde::Serialize>(self, payload: &T) -> Result<(), Error> {
        let body =
            serde_json::to_string(payload).map_err(|e| Error::Decode(e.to_string()))?;
        let response = self
            .request(reqwasm::http::Method::PATCH)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=minimal")
            .body(body)
            .send()
            .await
            .map_err(Error::from)?;
        Self::check(&response).await
    }

    /// Deletes the rows selected by the accumulated filters.
    pub async fn delete(self) -> Result<(), Error> {
        let response = self
            .request(reqwasm::http::Method::DELETE)
            .send()
            .await
            .map_err(Error::from)?;
        Self::check(&response).await
    }

    fn request(&self, method: reqwasm::http::Method) -> reqwasm::http::Request {
        reqwasm::http::Request::new(&self.url())
            .method(method)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer))
    }

    async fn check(response: &reqwasm::http::Response) -> Result<(), Error> {
        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(());
        }

        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str().map(String::from)))
                .unwrap_or(body),
            Err(_) => "Unknown error".to_string(),
        };
        Err(Error::Api { status, message })
    }
}

/// Extracts the total row count from a `Content-Range` header (`0-24/3573` or `*/0`).
fn parse_content_range(range: &str) -> Option<u64> {
    range.rsplit('/').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(table: &str) -> QueryBuilder {
        let config = Config {
            url: "https://example.supabase.co".into(),
            anon_key: "anon".into(),
        };
        QueryBuilder::new(config.clone(), config.anon_key.clone(), table)
    }

    /// Tests the bare table URL with no parameters.
    ///
    /// Expected: no query string is appended.
    #[test]
    fn builds_plain_table_url() {
        assert_eq!(
            builder("pets").url(),
            "https://example.supabase.co/rest/v1/pets"
        );
    }

    /// Tests a select with an embedded join plus ordering.
    ///
    /// Expected: parameters appear in call order, joined with `&`.
    #[test]
    fn builds_select_with_join_and_order() {
        let url = builder("pets")
            .select("*,owners(*)")
            .order("created_at", Order::Descending)
            .url();
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/pets?select=*,owners(*)&order=created_at.desc"
        );
    }

    /// Tests filter composition with equality, range, and limit parameters.
    ///
    /// Expected: every filter is rendered in PostgREST operator syntax.
    #[test]
    fn builds_filtered_query() {
        let url = builder("appointments")
            .select("id")
            .eq("status", "programada")
            .gte("appointment_date", "2026-08-07T00:00:00")
            .lt("appointment_date", "2026-08-08T00:00:00")
            .limit(5)
            .url();
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/appointments?select=id\
             &status=eq.programada\
             &appointment_date=gte.2026-08-07T00:00:00\
             &appointment_date=lt.2026-08-08T00:00:00\
             &limit=5"
        );
    }

    /// Tests the `in` filter over an id list.
    ///
    /// Expected: `id=in.(a,b)`.
    #[test]
    fn builds_in_list_filter() {
        let url = builder("profiles").in_list("id", ["a", "b"]).url();
        assert_eq!(
            url,
            "https://example.supabase.co/rest/v1/profiles?id=in.(a,b)"
        );
    }

    /// Tests parsing the total from a ranged Content-Range header.
    ///
    /// Expected: 3573
    #[test]
    fn parses_ranged_content_range() {
        assert_eq!(parse_content_range("0-24/3573"), Some(3573));
    }

    /// Tests parsing the total from an empty-range header.
    ///
    /// Expected: 0
    #[test]
    fn parses_empty_content_range() {
        assert_eq!(parse_content_range("*/0"), Some(0));
    }

    /// Tests rejecting a malformed Content-Range header.
    ///
    /// Expected: None
    #[test]
    fn rejects_malformed_content_range() {
        assert_eq!(parse_content_range("garbage"), None);
    }
}
