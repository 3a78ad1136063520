//! Conversion functions from `graphql_client` generated response types to
//! the domain types in [`crate::types`].
//!
//! Every query module generates its own response structs, so the per-surface
//! converters live next to each other here instead of on the types
//! themselves.

mod celebridades;
mod comments;
mod depoimentos;
mod lojas;
mod portfolio;

pub use celebridades::convert_celebridades;
pub use comments::convert_comment;
pub use depoimentos::convert_depoimentos;
pub use lojas::convert_lojas;
pub use portfolio::{
    convert_categorias, convert_portfolio_connection, convert_projeto, convert_projeto_page,
};

use chrono::NaiveDateTime;

/// Parse a WordPress site-local timestamp (`2024-05-17T10:30:00`).
///
/// WPGraphQL serializes `date`/`modified` without a timezone designator;
/// malformed values are dropped rather than failing the whole conversion.
pub(crate) fn parse_wp_date(value: Option<String>) -> Option<NaiveDateTime> {
    value.and_then(|s| NaiveDateTime::parse_from_str(&s, "%Y-%m-%dT%H:%M:%S").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wp_date_valid() {
        let parsed = parse_wp_date(Some("2024-05-17T10:30:00".to_string()));
        assert!(parsed.is_some());
    }

    #[test]
    fn test_parse_wp_date_none() {
        assert!(parse_wp_date(None).is_none());
    }

    #[test]
    fn test_parse_wp_date_malformed() {
        assert!(parse_wp_date(Some("17/05/2024".to_string())).is_none());
    }
}
