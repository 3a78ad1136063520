//! Cache types for WPGraphQL responses.
//!
//! Query results are cached whole, keyed by the surface they feed. Mutations
//! are never cached.

use crate::types::{Celebridade, CategoriaPortfolio, Depoimento, Loja, Projeto, ProjetoConnection};

/// Cache key for read queries.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    CelebridadesHome,
    DepoimentosHome,
    LojasHome,
    CategoriasPortfolio,
    PortfolioHome,
    Projeto(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Celebridades(Vec<Celebridade>),
    Depoimentos(Vec<Depoimento>),
    Lojas(Vec<Loja>),
    Categorias(Vec<CategoriaPortfolio>),
    Portfolio(ProjetoConnection),
    Projeto(Box<Projeto>),
}
