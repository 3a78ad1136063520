//! Celebridade type conversion functions.

use vitrine_core::{CelebridadeId, MediaItemId};

use crate::types::{Celebridade, Image};

use super::super::queries::get_celebridades_home;
use super::parse_wp_date;

pub fn convert_celebridades(
    conn: get_celebridades_home::GetCelebridadesHomeCelebridades,
) -> Vec<Celebridade> {
    conn.edges
        .into_iter()
        .map(|e| convert_celebridade(e.node))
        .collect()
}

fn convert_celebridade(
    node: get_celebridades_home::GetCelebridadesHomeCelebridadesEdgesNode,
) -> Celebridade {
    let (nome, legenda, foto) = node.acf_celebridades.map_or((None, None, None), |acf| {
        (
            acf.nome,
            acf.legenda,
            acf.foto.map(|f| convert_media(f.node)),
        )
    });

    Celebridade {
        id: node.id,
        database_id: CelebridadeId::new(node.database_id),
        slug: node.slug,
        title: node.title,
        date: parse_wp_date(node.date),
        nome,
        legenda,
        foto,
        featured_image: node.featured_image.map(|f| convert_media(f.node)),
    }
}

fn convert_media(m: get_celebridades_home::MediaItemFields) -> Image {
    Image {
        database_id: MediaItemId::new(m.database_id),
        url: m.source_url,
        alt_text: m.alt_text,
    }
}
