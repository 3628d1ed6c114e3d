use pig_analyzer::SourceMap;
use pig_ide::{CompletionMode, CompletionResult, CompletionSession, SessionState};

use crate::converter::Converter;
use crate::dto::v1;
use crate::offsets::byte_offset_to_utf16;

impl Converter {
    pub fn completion_view(source: &str, output: CompletionResult) -> v1::CompletionResult {
        let sm = SourceMap::new(source);
        let row = output.replace.row;
        let line = sm.line(row as usize).unwrap_or("");

        let col_utf16 = |col: u32| to_u32(byte_offset_to_utf16(line, col as usize));
        let abs_utf16 = |col: u32| {
            let byte = sm
                .offset(row as usize, col as usize)
                .map(|offset| offset as usize)
                .unwrap_or(source.len());
            to_u32(byte_offset_to_utf16(source, byte))
        };

        v1::CompletionResult {
            candidates: output.candidates,
            replace: v1::RowRange {
                row,
                start: col_utf16(output.replace.start),
                end: col_utf16(output.replace.end),
            },
            replace_absolute: v1::Span {
                start: abs_utf16(output.replace.start),
                end: abs_utf16(output.replace.end),
            },
            mode: mode_view(output.mode),
        }
    }

    pub fn session_view(session: &CompletionSession) -> v1::SessionView {
        match session.state() {
            SessionState::TopLevel => v1::SessionView {
                state: v1::SessionState::TopLevel,
                chain_depth: 0,
            },
            SessionState::InPath => v1::SessionView {
                state: v1::SessionState::InPath,
                chain_depth: 0,
            },
            SessionState::InPropertyChain { depth } => v1::SessionView {
                state: v1::SessionState::InPropertyChain,
                chain_depth: to_u32(depth),
            },
        }
    }
}

fn mode_view(mode: CompletionMode) -> v1::CompletionMode {
    match mode {
        CompletionMode::Path => v1::CompletionMode::Path,
        CompletionMode::TypeAnnotation => v1::CompletionMode::TypeAnnotation,
        CompletionMode::Member => v1::CompletionMode::Member,
        CompletionMode::General => v1::CompletionMode::General,
    }
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
