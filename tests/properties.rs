//! Property tests for the tokenizer and the style fold

use ansi_lens::style::{Paint, ResolvedColor, Rgb};
use ansi_lens::{resolve, tokenize, Category, PartKind, TerminalStyleState, TokenKind};
use proptest::prelude::*;

/// Text mixing plain characters with well-formed and broken sequences
fn ansi_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 ;\\[]{0,8}",
        "\\PC{0,4}",
        (prop::collection::vec(0u32..300, 0..6), "[mABCDHJKhl~]").prop_map(|(params, cmd)| {
            let params: Vec<String> = params.iter().map(u32::to_string).collect();
            format!("\x1b[{}{}", params.join(";"), cmd)
        }),
        Just("\x1b[?25l".to_string()),
        Just("\\e[1m".to_string()),
        Just("\\033[0m".to_string()),
        Just("\x1b[".to_string()),
        Just("\x1b".to_string()),
    ];
    prop::collection::vec(piece, 0..12).prop_map(|pieces| pieces.concat())
}

fn sgr_params() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(prop_oneof![0u32..110, Just(38), Just(48), 0u32..1000], 0..10)
}

/// SGR codes without 38/48, so every value is read as a code of its own
fn plain_sgr_params() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(
        prop_oneof![0u32..38, 39u32..48, 49u32..1000],
        0..10,
    )
}

proptest! {
    #[test]
    fn test_tokens_reconstruct_input(input in ansi_text()) {
        let tokens = tokenize(&input);
        let rebuilt: String = tokens.iter().map(|t| t.raw.as_str()).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_tokens_partition_input(input in ansi_text()) {
        let tokens = tokenize(&input);
        let mut expected_start = 0;
        for (i, token) in tokens.iter().enumerate() {
            prop_assert_eq!(token.span.start, expected_start);
            prop_assert!(!token.span.is_empty());
            prop_assert_eq!(&input[token.span.start..token.span.end], token.raw.as_str());
            prop_assert_eq!(token.id.0, i);
            expected_start = token.span.end;
        }
        prop_assert_eq!(expected_start, input.len());
    }

    #[test]
    fn test_no_adjacent_text_tokens(input in ansi_text()) {
        let tokens = tokenize(&input);
        for pair in tokens.windows(2) {
            prop_assert!(!(pair[0].is_text() && pair[1].is_text()));
        }
    }

    #[test]
    fn test_tokenize_is_deterministic(input in ansi_text()) {
        prop_assert_eq!(tokenize(&input), tokenize(&input));
    }

    #[test]
    fn test_every_escape_has_marker_and_command(input in ansi_text()) {
        for token in tokenize(&input) {
            if let TokenKind::Escape(seq) = &token.kind {
                let kinds: Vec<_> = seq.parts.iter().map(|p| p.kind()).collect();
                prop_assert_eq!(kinds.first(), Some(&PartKind::Marker));
                prop_assert_eq!(kinds.last(), Some(&PartKind::Command));
                let params = kinds.iter().filter(|k| **k == PartKind::Parameter).count();
                prop_assert_eq!(params, seq.params.len());
            }
        }
    }

    #[test]
    fn test_reset_discards_prior_state(before in plain_sgr_params(), after in sgr_params()) {
        let mut params = before;
        params.push(0);
        let start = TerminalStyleState::default().fold(&[1, 3, 31, 44]);

        let with_prefix = start.fold(&params).fold(&after);
        let fresh = TerminalStyleState::default().fold(&after);
        prop_assert_eq!(with_prefix, fresh);
    }

    #[test]
    fn test_reset_claims_category(params in plain_sgr_params()) {
        let raw = format!(
            "\x1b[{}m",
            params.iter().map(u32::to_string).collect::<Vec<_>>().join(";")
        );
        let tokens = tokenize(&raw);
        let seq = tokens[0].escape().unwrap();
        if seq.params.contains(&0) {
            prop_assert_eq!(seq.category, Category::Reset);
        } else {
            prop_assert_ne!(seq.category, Category::Reset);
        }
    }

    #[test]
    fn test_fold_is_total(params in prop::collection::vec(any::<u32>(), 0..16)) {
        let _ = TerminalStyleState::default().fold(&params);
    }

    #[test]
    fn test_palette_foreground(index in any::<u8>()) {
        let state = TerminalStyleState::default().fold(&[38, 5, u32::from(index)]);
        prop_assert_eq!(state.foreground, Some(ResolvedColor::Indexed(index)));
        prop_assert_eq!(state.background, None);
    }

    #[test]
    fn test_rgb_background(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let params = [48, 2, u32::from(r), u32::from(g), u32::from(b), 1];
        let state = TerminalStyleState::default().fold(&params);
        prop_assert_eq!(state.background, Some(ResolvedColor::Rgb(Rgb::new(r, g, b))));
        // The trailing code is read as an ordinary code, not a component
        prop_assert!(state.bold);
    }

    #[test]
    fn test_rgb_resolves_on_both_layers(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let (r32, g32, b32) = (u32::from(r), u32::from(g), u32::from(b));
        let state = TerminalStyleState::default()
            .fold(&[38, 2, r32, g32, b32, 48, 2, b32, g32, r32]);
        let style = resolve(&state);
        prop_assert_eq!(style.foreground, Some(Paint::Rgb(Rgb::new(r, g, b))));
        prop_assert_eq!(style.background, Some(Paint::Rgb(Rgb::new(b, g, r))));
    }
}
