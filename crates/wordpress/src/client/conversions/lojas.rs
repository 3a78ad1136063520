//! Loja type conversion functions.

use vitrine_core::{Email, LojaId, MediaItemId};

use crate::types::{Image, Loja, LojaEmails};

use super::super::queries::get_lojas_home;

pub fn convert_lojas(conn: get_lojas_home::GetLojasHomeLojas) -> Vec<Loja> {
    conn.edges.into_iter().map(|e| convert_loja(e.node)).collect()
}

fn convert_loja(node: get_lojas_home::GetLojasHomeLojasEdgesNode) -> Loja {
    let featured_image = node.featured_image.map(|f| convert_media(f.node));

    let Some(acf) = node.acf_lojas else {
        return Loja {
            id: node.id,
            database_id: LojaId::new(node.database_id),
            slug: node.slug,
            title: node.title,
            featured_image,
            endereco: None,
            bairro: None,
            cidade: None,
            estado: None,
            telefone: None,
            whatsapp: None,
            horario_funcionamento: None,
            link_google_maps: None,
            emails: LojaEmails::default(),
        };
    };

    let emails = acf.emails.map_or_else(LojaEmails::default, |e| LojaEmails {
        contato: parse_acf_email("contato", e.contato),
        sac: parse_acf_email("sac", e.sac),
    });

    Loja {
        id: node.id,
        database_id: LojaId::new(node.database_id),
        slug: node.slug,
        title: node.title,
        featured_image,
        endereco: acf.endereco,
        bairro: acf.bairro,
        cidade: acf.cidade,
        estado: acf.estado,
        telefone: acf.telefone,
        whatsapp: acf.whatsapp,
        horario_funcionamento: acf.horario_funcionamento,
        link_google_maps: acf.link_google_maps,
        emails,
    }
}

fn convert_media(m: get_lojas_home::MediaItemFields) -> Image {
    Image {
        database_id: MediaItemId::new(m.database_id),
        url: m.source_url,
        alt_text: m.alt_text,
    }
}

/// ACF stores emails as free text; drop malformed values instead of failing
/// the whole store listing.
fn parse_acf_email(field: &'static str, value: Option<String>) -> Option<Email> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Email::parse(trimmed) {
        Ok(email) => Some(email),
        Err(err) => {
            tracing::warn!(field, error = %err, "discarding malformed store email");
            None
        }
    }
}
