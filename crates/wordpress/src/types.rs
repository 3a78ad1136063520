//! Domain types for the WPGraphQL API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! `graphql_client` generated types. Nullability follows the schema: a field
//! the server may resolve to `null` stays an `Option` here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use vitrine_core::{
    CategoriaPortfolioId, CelebridadeId, CommentId, CommentStatus, ContentStatus, DepoimentoId,
    Email, LojaId, MediaItemId, ProjetoId,
};

// =============================================================================
// Media Types
// =============================================================================

/// An uploaded image resolved through a media connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Media library row key.
    pub database_id: MediaItemId,
    /// URL of the requested rendition. Null when the file is missing from
    /// the media library.
    pub url: Option<String>,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

// =============================================================================
// Content Types
// =============================================================================

/// A celebrity entry shown on the home page wall.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Celebridade {
    /// Global opaque ID.
    pub id: String,
    /// Database row key.
    pub database_id: CelebridadeId,
    /// URL slug.
    pub slug: Option<String>,
    /// Post title.
    pub title: Option<String>,
    /// Publication timestamp (site-local).
    pub date: Option<NaiveDateTime>,
    /// Display name from the ACF group.
    pub nome: Option<String>,
    /// Photo caption from the ACF group.
    pub legenda: Option<String>,
    /// Photo from the ACF group.
    pub foto: Option<Image>,
    /// Featured image fallback.
    pub featured_image: Option<Image>,
}

impl Celebridade {
    /// Preferred image: the ACF photo, falling back to the featured image.
    #[must_use]
    pub fn imagem(&self) -> Option<&Image> {
        self.foto.as_ref().or(self.featured_image.as_ref())
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depoimento {
    /// Global opaque ID.
    pub id: String,
    /// Database row key.
    pub database_id: DepoimentoId,
    /// URL slug.
    pub slug: Option<String>,
    /// Publication timestamp (site-local).
    pub date: Option<NaiveDateTime>,
    /// Testimonial body text.
    pub depoimento: Option<String>,
    /// Author display name.
    pub autor: Option<String>,
    /// Author role or qualifier line.
    pub cargo: Option<String>,
}

/// Contact emails of a store, parsed from the nested ACF group.
///
/// ACF stores these as free text, so addresses that fail structural
/// validation come through as `None` (and are logged at conversion time).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LojaEmails {
    /// General contact address.
    pub contato: Option<Email>,
    /// Customer service (SAC) address.
    pub sac: Option<Email>,
}

/// A physical store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loja {
    /// Global opaque ID.
    pub id: String,
    /// Database row key.
    pub database_id: LojaId,
    /// URL slug.
    pub slug: Option<String>,
    /// Store name.
    pub title: Option<String>,
    /// Facade photo.
    pub featured_image: Option<Image>,
    /// Street address.
    pub endereco: Option<String>,
    /// Neighbourhood.
    pub bairro: Option<String>,
    /// City.
    pub cidade: Option<String>,
    /// Two-letter state code.
    pub estado: Option<String>,
    /// Landline phone.
    pub telefone: Option<String>,
    /// WhatsApp number.
    pub whatsapp: Option<String>,
    /// Opening hours, free text.
    pub horario_funcionamento: Option<String>,
    /// Google Maps link.
    pub link_google_maps: Option<String>,
    /// Validated contact addresses.
    pub emails: LojaEmails,
}

/// A portfolio category term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriaPortfolio {
    /// Database row key.
    pub database_id: CategoriaPortfolioId,
    /// Term name.
    pub name: Option<String>,
    /// Term slug.
    pub slug: Option<String>,
    /// Term archive URI (only fetched on some surfaces).
    pub uri: Option<String>,
    /// Number of published projects in this category (only fetched on some
    /// surfaces).
    pub count: Option<i64>,
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projeto {
    /// Global opaque ID.
    pub id: String,
    /// Database row key.
    pub database_id: ProjetoId,
    /// URL slug.
    pub slug: Option<String>,
    /// Project title.
    pub title: Option<String>,
    /// Publication timestamp (site-local).
    pub date: Option<NaiveDateTime>,
    /// Last-modified timestamp (site-local).
    pub modified: Option<NaiveDateTime>,
    /// Publication status.
    pub status: Option<ContentStatus>,
    /// Canonical URI.
    pub uri: Option<String>,
    /// Absolute permalink.
    pub link: Option<String>,
    /// Client name from the ACF group.
    pub cliente: Option<String>,
    /// Project description from the ACF group.
    pub descricao: Option<String>,
    /// Video embed URL from the ACF group.
    pub video: Option<String>,
    /// Cover image from the ACF group.
    pub imagem_capa: Option<Image>,
    /// Gallery images from the ACF group.
    pub galeria: Vec<Image>,
    /// Portfolio categories assigned to this project.
    pub categorias: Vec<CategoriaPortfolio>,
}

// =============================================================================
// Pagination Types
// =============================================================================

/// Cursor pagination information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Whether there are items before this page.
    pub has_previous_page: bool,
    /// Cursor for the first item.
    pub start_cursor: Option<String>,
    /// Cursor for the last item.
    pub end_cursor: Option<String>,
}

/// Offset pagination information (wp-graphql-offset-pagination).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetPageInfo {
    /// Whether there are items past this window.
    pub has_more: bool,
    /// Whether there are items before this window.
    pub has_previous: bool,
    /// Total matching items, when the server computed it.
    pub total: Option<i64>,
}

/// Cursor-paginated list of projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjetoConnection {
    /// Projects in this page.
    pub projetos: Vec<Projeto>,
    /// Pagination info.
    pub page_info: PageInfo,
    /// Total matching projects, when offset-pagination metadata was
    /// requested alongside the cursors.
    pub total: Option<i64>,
}

/// Offset-paginated window of projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjetoPage {
    /// Projects in this window.
    pub projetos: Vec<Projeto>,
    /// Window position info.
    pub page: OffsetPageInfo,
}

// =============================================================================
// Comment Types
// =============================================================================

/// A comment as returned by the `createComment` mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Global opaque ID.
    pub id: String,
    /// Database row key.
    pub database_id: CommentId,
    /// Rendered comment body.
    pub content: Option<String>,
    /// Submission timestamp (site-local).
    pub date: Option<NaiveDateTime>,
    /// Moderation status; new submissions typically land in `Hold`.
    pub status: Option<CommentStatus>,
}

/// Input for submitting a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentInput {
    /// Database ID of the post being commented on.
    pub comment_on: i64,
    /// Comment body.
    pub content: String,
    /// Author display name.
    pub author: Option<String>,
    /// Author email, validated before submission.
    pub author_email: Option<Email>,
    /// Author website.
    pub author_url: Option<String>,
}
