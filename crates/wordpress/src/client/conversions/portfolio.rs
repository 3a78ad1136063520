//! Portfolio type conversion functions.
//!
//! The portfolio surfaces three shapes of the same data: the home grid
//! (cursor-paged, first: 1000), the offset-paged grid, and the project detail
//! page. Each query generates its own response structs, so each gets its own
//! converter.

use vitrine_core::{CategoriaPortfolioId, MediaItemId, ProjetoId};

use crate::types::{
    CategoriaPortfolio, Image, OffsetPageInfo, PageInfo, Projeto, ProjetoConnection, ProjetoPage,
};

use super::super::queries::{
    get_categorias_portfolio_home, get_portfolio_home, get_projeto_by_slug, get_projetos_paged,
};
use super::parse_wp_date;

// =============================================================================
// GetCategoriasPortfolioHome conversions
// =============================================================================

pub fn convert_categorias(
    conn: get_categorias_portfolio_home::GetCategoriasPortfolioHomeCategoriasPortfolio,
) -> Vec<CategoriaPortfolio> {
    conn.nodes
        .into_iter()
        .map(|node| CategoriaPortfolio {
            database_id: CategoriaPortfolioId::new(node.database_id),
            name: node.name,
            slug: node.slug,
            uri: node.uri,
            count: node.count,
        })
        .collect()
}

// =============================================================================
// GetPortfolioHome conversions
// =============================================================================

pub fn convert_portfolio_connection(
    conn: get_portfolio_home::GetPortfolioHomeProjetos,
) -> ProjetoConnection {
    let total = conn
        .page_info
        .offset_pagination
        .as_ref()
        .and_then(|o| o.total);

    ProjetoConnection {
        projetos: conn
            .edges
            .into_iter()
            .map(|e| convert_portfolio_card(e.node))
            .collect(),
        page_info: PageInfo {
            has_next_page: conn.page_info.has_next_page,
            has_previous_page: conn.page_info.has_previous_page,
            start_cursor: conn.page_info.start_cursor,
            end_cursor: conn.page_info.end_cursor,
        },
        total,
    }
}

fn convert_portfolio_card(node: get_portfolio_home::GetPortfolioHomeProjetosEdgesNode) -> Projeto {
    let (cliente, imagem_capa) = node.acf_portfolio.map_or((None, None), |acf| {
        (
            acf.cliente,
            acf.imagem_capa.map(|c| convert_media_home(c.node)),
        )
    });

    Projeto {
        id: node.id,
        database_id: ProjetoId::new(node.database_id),
        slug: node.slug,
        title: node.title,
        date: parse_wp_date(node.date),
        modified: None,
        status: node.status.and_then(|s| s.parse().ok()),
        uri: None,
        link: node.link,
        cliente,
        descricao: None,
        video: None,
        imagem_capa,
        galeria: Vec::new(),
        categorias: node.categorias_portfolio.map_or_else(Vec::new, |c| {
            c.nodes
                .into_iter()
                .map(|n| CategoriaPortfolio {
                    database_id: CategoriaPortfolioId::new(n.database_id),
                    name: n.name,
                    slug: n.slug,
                    uri: None,
                    count: None,
                })
                .collect()
        }),
    }
}

fn convert_media_home(m: get_portfolio_home::MediaItemFields) -> Image {
    Image {
        database_id: MediaItemId::new(m.database_id),
        url: m.source_url,
        alt_text: m.alt_text,
    }
}

// =============================================================================
// GetProjetosPaged conversions
// =============================================================================

pub fn convert_projeto_page(conn: get_projetos_paged::GetProjetosPagedProjetos) -> ProjetoPage {
    let page = conn
        .page_info
        .offset_pagination
        .map_or_else(default_offset_page, |o| OffsetPageInfo {
            has_more: o.has_more.unwrap_or(false),
            has_previous: o.has_previous.unwrap_or(false),
            total: o.total,
        });

    ProjetoPage {
        projetos: conn.nodes.into_iter().map(convert_paged_card).collect(),
        page,
    }
}

fn default_offset_page() -> OffsetPageInfo {
    OffsetPageInfo {
        has_more: false,
        has_previous: false,
        total: None,
    }
}

fn convert_paged_card(node: get_projetos_paged::GetProjetosPagedProjetosNodes) -> Projeto {
    let (cliente, imagem_capa) = node.acf_portfolio.map_or((None, None), |acf| {
        (
            acf.cliente,
            acf.imagem_capa.map(|c| convert_media_paged(c.node)),
        )
    });

    Projeto {
        id: node.id,
        database_id: ProjetoId::new(node.database_id),
        slug: node.slug,
        title: node.title,
        date: parse_wp_date(node.date),
        modified: None,
        status: None,
        uri: None,
        link: None,
        cliente,
        descricao: None,
        video: None,
        imagem_capa,
        galeria: Vec::new(),
        categorias: node.categorias_portfolio.map_or_else(Vec::new, |c| {
            c.nodes
                .into_iter()
                .map(|n| CategoriaPortfolio {
                    database_id: CategoriaPortfolioId::new(n.database_id),
                    name: n.name,
                    slug: n.slug,
                    uri: None,
                    count: None,
                })
                .collect()
        }),
    }
}

fn convert_media_paged(m: get_projetos_paged::MediaItemFields) -> Image {
    Image {
        database_id: MediaItemId::new(m.database_id),
        url: m.source_url,
        alt_text: m.alt_text,
    }
}

// =============================================================================
// GetProjetoBySlug conversions
// =============================================================================

pub fn convert_projeto(projeto: get_projeto_by_slug::GetProjetoBySlugProjeto) -> Projeto {
    let (cliente, descricao, video, imagem_capa, galeria) =
        projeto
            .acf_portfolio
            .map_or((None, None, None, None, Vec::new()), |acf| {
                (
                    acf.cliente,
                    acf.descricao,
                    acf.video,
                    acf.imagem_capa.map(|c| convert_media_detail(c.node)),
                    acf.galeria.map_or_else(Vec::new, |g| {
                        g.nodes.into_iter().map(convert_media_detail).collect()
                    }),
                )
            });

    Projeto {
        id: projeto.id,
        database_id: ProjetoId::new(projeto.database_id),
        slug: projeto.slug,
        title: projeto.title,
        date: parse_wp_date(projeto.date),
        modified: parse_wp_date(projeto.modified),
        status: projeto.status.and_then(|s| s.parse().ok()),
        uri: projeto.uri,
        link: projeto.link,
        cliente,
        descricao,
        video,
        imagem_capa,
        galeria,
        categorias: projeto.categorias_portfolio.map_or_else(Vec::new, |c| {
            c.nodes
                .into_iter()
                .map(|n| CategoriaPortfolio {
                    database_id: CategoriaPortfolioId::new(n.database_id),
                    name: n.name,
                    slug: n.slug,
                    uri: n.uri,
                    count: None,
                })
                .collect()
        }),
    }
}

fn convert_media_detail(m: get_projeto_by_slug::MediaItemFields) -> Image {
    Image {
        database_id: MediaItemId::new(m.database_id),
        url: m.source_url,
        alt_text: m.alt_text,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use vitrine_core::ContentStatus;

    #[test]
    fn test_convert_categorias_from_response() {
        let data: get_categorias_portfolio_home::ResponseData = serde_json::from_value(json!({
            "categoriasPortfolio": {
                "nodes": [
                    {
                        "id": "Y2F0ZWdvcmlhOjM=",
                        "databaseId": 3,
                        "name": "Residencial",
                        "slug": "residencial",
                        "uri": "/categoria-portfolio/residencial/",
                        "count": 12
                    },
                    {
                        "id": "Y2F0ZWdvcmlhOjQ=",
                        "databaseId": 4,
                        "name": "Comercial",
                        "slug": "comercial",
                        "uri": null,
                        "count": null
                    }
                ],
                "pageInfo": {
                    "hasNextPage": false,
                    "endCursor": null
                }
            }
        }))
        .unwrap();

        let categorias = convert_categorias(data.categorias_portfolio.unwrap());
        assert_eq!(categorias.len(), 2);
        assert_eq!(
            categorias.first().unwrap().database_id,
            CategoriaPortfolioId::new(3)
        );
        assert_eq!(categorias.first().unwrap().count, Some(12));
        assert!(categorias.get(1).unwrap().count.is_none());
    }

    #[test]
    fn test_convert_portfolio_connection_preserves_envelope() {
        let data: get_portfolio_home::ResponseData = serde_json::from_value(json!({
            "projetos": {
                "edges": [
                    {
                        "cursor": "YXJyYXljb25uZWN0aW9uOjEwMQ==",
                        "node": {
                            "id": "cHJvamV0bzoxMDE=",
                            "databaseId": 101,
                            "slug": "loja-conceito-sp",
                            "title": "Loja Conceito SP",
                            "date": "2024-03-08T15:00:00",
                            "status": "publish",
                            "link": "https://cms.example.com.br/projeto/loja-conceito-sp/",
                            "acfPortfolio": {
                                "cliente": "Rede Aurora",
                                "imagemCapa": {
                                    "node": {
                                        "databaseId": 200,
                                        "sourceUrl": "https://cms.example.com.br/uploads/capa.jpg",
                                        "altText": "Vista da fachada"
                                    }
                                }
                            },
                            "categoriasPortfolio": {
                                "nodes": [
                                    { "databaseId": 3, "name": "Comercial", "slug": "comercial" }
                                ]
                            }
                        }
                    }
                ],
                "pageInfo": {
                    "hasNextPage": true,
                    "hasPreviousPage": false,
                    "startCursor": "YXJyYXljb25uZWN0aW9uOjEwMQ==",
                    "endCursor": "YXJyYXljb25uZWN0aW9uOjEwMQ==",
                    "offsetPagination": { "total": 57 }
                }
            }
        }))
        .unwrap();

        let connection = convert_portfolio_connection(data.projetos.unwrap());

        // Envelope: edges length and pageInfo flags survive conversion.
        assert_eq!(connection.projetos.len(), 1);
        assert!(connection.page_info.has_next_page);
        assert!(!connection.page_info.has_previous_page);
        assert_eq!(connection.total, Some(57));

        let projeto = connection.projetos.first().unwrap();
        assert_eq!(projeto.database_id, ProjetoId::new(101));
        assert_eq!(projeto.status, Some(ContentStatus::Publish));
        assert_eq!(projeto.cliente.as_deref(), Some("Rede Aurora"));
        assert_eq!(projeto.categorias.len(), 1);
        assert_eq!(
            projeto.imagem_capa.as_ref().unwrap().database_id,
            MediaItemId::new(200)
        );
    }

    #[test]
    fn test_convert_projeto_page_offset_envelope() {
        let data: get_projetos_paged::ResponseData = serde_json::from_value(json!({
            "projetos": {
                "nodes": [
                    {
                        "id": "cHJvamV0bzoxMDI=",
                        "databaseId": 102,
                        "slug": "escritorio-campinas",
                        "title": "Escritório Campinas",
                        "date": null,
                        "acfPortfolio": null,
                        "categoriasPortfolio": null
                    }
                ],
                "pageInfo": {
                    "offsetPagination": {
                        "hasMore": true,
                        "hasPrevious": false,
                        "total": 57
                    }
                }
            }
        }))
        .unwrap();

        let page = convert_projeto_page(data.projetos.unwrap());
        assert_eq!(page.projetos.len(), 1);
        assert!(page.page.has_more);
        assert!(!page.page.has_previous);
        assert_eq!(page.page.total, Some(57));

        let projeto = page.projetos.first().unwrap();
        assert!(projeto.cliente.is_none());
        assert!(projeto.categorias.is_empty());
    }

    #[test]
    fn test_convert_projeto_detail() {
        let data: get_projeto_by_slug::ResponseData = serde_json::from_value(json!({
            "projeto": {
                "id": "cHJvamV0bzoxMDE=",
                "databaseId": 101,
                "slug": "loja-conceito-sp",
                "title": "Loja Conceito SP",
                "date": "2024-03-08T15:00:00",
                "modified": "2024-04-01T09:12:00",
                "status": "publish",
                "uri": "/projeto/loja-conceito-sp/",
                "link": "https://cms.example.com.br/projeto/loja-conceito-sp/",
                "acfPortfolio": {
                    "cliente": "Rede Aurora",
                    "descricao": "Projeto completo de arquitetura de varejo.",
                    "video": null,
                    "imagemCapa": {
                        "node": {
                            "databaseId": 200,
                            "sourceUrl": "https://cms.example.com.br/uploads/capa.jpg",
                            "altText": null
                        }
                    },
                    "galeria": {
                        "nodes": [
                            {
                                "databaseId": 201,
                                "sourceUrl": "https://cms.example.com.br/uploads/g1.jpg",
                                "altText": "Interior"
                            },
                            {
                                "databaseId": 202,
                                "sourceUrl": null,
                                "altText": null
                            }
                        ]
                    }
                },
                "categoriasPortfolio": {
                    "nodes": [
                        {
                            "databaseId": 3,
                            "name": "Comercial",
                            "slug": "comercial",
                            "uri": "/categoria-portfolio/comercial/"
                        }
                    ]
                }
            }
        }))
        .unwrap();

        let projeto = convert_projeto(data.projeto.unwrap());

        assert_eq!(projeto.database_id, ProjetoId::new(101));
        assert!(projeto.date.is_some());
        assert!(projeto.modified.is_some());
        assert_eq!(projeto.status, Some(ContentStatus::Publish));
        assert_eq!(projeto.galeria.len(), 2);
        // Null scalars inside the gallery stay None.
        assert!(projeto.galeria.get(1).unwrap().url.is_none());
        assert_eq!(
            projeto.categorias.first().unwrap().uri.as_deref(),
            Some("/categoria-portfolio/comercial/")
        );
    }

    #[test]
    fn test_convert_projeto_with_unknown_status() {
        let data: get_projeto_by_slug::ResponseData = serde_json::from_value(json!({
            "projeto": {
                "id": "cHJvamV0bzo5",
                "databaseId": 9,
                "slug": null,
                "title": null,
                "date": null,
                "modified": null,
                "status": "some-future-status",
                "uri": null,
                "link": null,
                "acfPortfolio": null,
                "categoriasPortfolio": null
            }
        }))
        .unwrap();

        let projeto = convert_projeto(data.projeto.unwrap());
        // Unknown status strings degrade to None instead of panicking.
        assert!(projeto.status.is_none());
        assert!(projeto.galeria.is_empty());
    }
}
