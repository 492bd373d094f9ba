use std::str::Chars;

/// Strips matching surrounding quotes, if any.
pub fn unquote_string(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('"') && s.ends_with('"'))
            || (s.starts_with('\'') && s.ends_with('\''))
            || (s.starts_with('`') && s.ends_with('`')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Value of a quoted JavaScript string literal, escape sequences decoded.
pub fn string_value(raw: &str) -> String {
    decode_escapes(unquote_string(raw))
}

/// Decodes JavaScript escape sequences in the body of a string literal.
///
/// Malformed `\x` / `\u` escapes keep the escaped letter, the way sloppy-mode
/// engines tolerate them.
pub fn decode_escapes(body: &str) -> String {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            out.push('\\');
            break;
        };
        match escaped {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.clone().next().is_some_and(|n| n.is_ascii_digit()) => out.push('\0'),
            'x' => match take_hex(&mut chars, 2) {
                Some(code) => out.push(char::from_u32(code).unwrap_or('\u{fffd}')),
                None => out.push('x'),
            },
            'u' => match take_unicode_escape(&mut chars) {
                Some(code) => push_code_unit(&mut out, &mut chars, code),
                None => out.push('u'),
            },
            // line continuation
            '\r' => {
                if chars.clone().next() == Some('\n') {
                    chars.next();
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
    }

    out
}

fn take_hex(chars: &mut Chars<'_>, digits: usize) -> Option<u32> {
    let mut lookahead = chars.clone();
    let mut code = 0u32;
    for _ in 0..digits {
        code = code * 16 + lookahead.next()?.to_digit(16)?;
    }
    *chars = lookahead;
    Some(code)
}

fn take_unicode_escape(chars: &mut Chars<'_>) -> Option<u32> {
    let mut lookahead = chars.clone();
    if lookahead.next() != Some('{') {
        return take_hex(chars, 4);
    }

    let mut code = 0u32;
    let mut digits = 0;
    loop {
        match lookahead.next()? {
            '}' if digits > 0 => break,
            c => {
                code = code.checked_mul(16)?.checked_add(c.to_digit(16)?)?;
                digits += 1;
            }
        }
    }
    if code > 0x10ffff {
        return None;
    }
    *chars = lookahead;
    Some(code)
}

/// Pushes a UTF-16 code unit, pairing a high surrogate with a following
/// `\uDC00`-range escape.
fn push_code_unit(out: &mut String, chars: &mut Chars<'_>, code: u32) {
    if (0xd800..0xdc00).contains(&code) {
        let mut lookahead = chars.clone();
        if lookahead.next() == Some('\\') && lookahead.next() == Some('u') {
            if let Some(low) = take_hex(&mut lookahead, 4) {
                if (0xdc00..0xe000).contains(&low) {
                    let combined = 0x10000 + ((code - 0xd800) << 10) + (low - 0xdc00);
                    out.push(char::from_u32(combined).unwrap_or('\u{fffd}'));
                    *chars = lookahead;
                    return;
                }
            }
        }
    }
    out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
}
