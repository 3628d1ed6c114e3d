use std::collections::BTreeMap;

use pig_ide::{CompletionConfig, SymbolKind, SymbolSnapshot};

use crate::converter::Converter;
use crate::dto::v1;

impl Converter {
    pub fn symbols_from_dto(dto: v1::Symbols) -> SymbolSnapshot {
        SymbolSnapshot {
            paths: dto.paths,
            variables: dto.variables,
            scope: scope_from_dto(dto.scope),
        }
    }

    /// Applies the fields present in `dto` on top of `base`.
    pub fn config_from_dto(base: CompletionConfig, dto: v1::CompletionConfig) -> CompletionConfig {
        CompletionConfig {
            pad_single_candidate: dto.pad_single_candidate.unwrap_or(base.pad_single_candidate),
            path_separator: dto.path_separator.unwrap_or(base.path_separator),
        }
    }
}

fn scope_from_dto(scope: BTreeMap<String, v1::SymbolKind>) -> BTreeMap<String, SymbolKind> {
    scope
        .into_iter()
        .map(|(name, kind)| (name, kind_from_dto(kind)))
        .collect()
}

fn kind_from_dto(kind: v1::SymbolKind) -> SymbolKind {
    match kind {
        v1::SymbolKind::Scalar => SymbolKind::Scalar,
        v1::SymbolKind::Struct { children } => SymbolKind::Struct {
            children: scope_from_dto(children),
        },
        v1::SymbolKind::Function => SymbolKind::Function,
    }
}
