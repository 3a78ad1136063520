//! Depoimento type conversion functions.

use vitrine_core::DepoimentoId;

use crate::types::Depoimento;

use super::super::queries::get_depoimentos_home;
use super::parse_wp_date;

pub fn convert_depoimentos(
    conn: get_depoimentos_home::GetDepoimentosHomeDepoimentos,
) -> Vec<Depoimento> {
    conn.edges
        .into_iter()
        .map(|e| convert_depoimento(e.node))
        .collect()
}

fn convert_depoimento(
    node: get_depoimentos_home::GetDepoimentosHomeDepoimentosEdgesNode,
) -> Depoimento {
    let (depoimento, autor, cargo) = node.acf_depoimentos.map_or((None, None, None), |acf| {
        (acf.depoimento, acf.autor, acf.cargo)
    });

    Depoimento {
        id: node.id,
        database_id: DepoimentoId::new(node.database_id),
        slug: node.slug,
        date: parse_wp_date(node.date),
        depoimento,
        autor,
        cargo,
    }
}
