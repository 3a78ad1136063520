//! GraphQL query definitions for the WPGraphQL API.
//!
//! Each struct pairs one operation from `graphql/queries/` with its
//! variables and response types, generated against `graphql/schema.graphql`.
//! The struct name must match the operation name in the document.
//!
//! WPGraphQL only uses the built-in scalars (ID, String, Int, Float,
//! Boolean), so no scalar aliases are needed here.

use graphql_client::GraphQLQuery;

// =============================================================================
// Home page queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/celebridades.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetCelebridadesHome;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/depoimentos.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetDepoimentosHome;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/lojas.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetLojasHome;

// =============================================================================
// Portfolio queries
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/portfolio.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetCategoriasPortfolioHome;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/portfolio.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetPortfolioHome;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/portfolio.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetProjetosPaged;

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/portfolio.graphql",
    response_derives = "Debug, Clone"
)]
pub struct GetProjetoBySlug;

// =============================================================================
// Mutations
// =============================================================================

#[derive(GraphQLQuery)]
#[graphql(
    schema_path = "graphql/schema.graphql",
    query_path = "graphql/queries/comments.graphql",
    response_derives = "Debug, Clone"
)]
pub struct CreateComment;
