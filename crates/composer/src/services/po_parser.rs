//! Gettext .po catalog parser.
//!
//! Reads translated menu strings. Supports `msgctxt`, `msgid`, `msgstr`,
//! continuation lines, and the usual escapes. Entries flagged `#, fuzzy`,
//! untranslated entries, and the header entry (empty `msgid`) are dropped.

/// One translated string from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoEntry {
    pub context: String,
    pub source: String,
    pub translation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    Context,
    Source,
    Translation,
    /// Plural forms and other directives this parser does not keep.
    Ignored,
}

#[derive(Default)]
struct PendingEntry {
    context: String,
    source: String,
    translation: String,
    fuzzy: bool,
    /// A `msgstr` line was seen, so the next `msgid` begins a new entry.
    seen_msgstr: bool,
    current: Option<Directive>,
}

impl PendingEntry {
    fn append(&mut self, text: &str) {
        match self.current {
            Some(Directive::Context) => self.context.push_str(text),
            Some(Directive::Source) => self.source.push_str(text),
            Some(Directive::Translation) => self.translation.push_str(text),
            Some(Directive::Ignored) | None => {}
        }
    }

    fn has_content(&self) -> bool {
        !self.source.is_empty() || !self.translation.is_empty() || !self.context.is_empty()
    }

    fn finish(&mut self, entries: &mut Vec<PoEntry>) {
        let pending = std::mem::take(self);
        if pending.fuzzy || pending.source.is_empty() || pending.translation.is_empty() {
            return;
        }
        entries.push(PoEntry {
            context: pending.context,
            source: pending.source,
            translation: pending.translation,
        });
    }
}

/// Parse .po file contents into translated entries.
pub fn parse_po(content: &str) -> Vec<PoEntry> {
    let mut entries = Vec::new();
    let mut pending = PendingEntry::default();

    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            pending.finish(&mut entries);
            continue;
        }

        if let Some(flags) = line.strip_prefix("#,") {
            // Flags precede the entry they describe.
            if pending.has_content() {
                pending.finish(&mut entries);
            }
            if flags.split(',').any(|f| f.trim() == "fuzzy") {
                pending.fuzzy = true;
            }
            continue;
        }
        if line.starts_with('#') {
            continue;
        }

        if line.starts_with('"') {
            pending.append(&unquote(line));
            continue;
        }

        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let directive = match keyword {
            "msgctxt" => Directive::Context,
            "msgid" => Directive::Source,
            "msgstr" | "msgstr[0]" => Directive::Translation,
            _ => Directive::Ignored,
        };

        // A new msgctxt, or a msgid after a complete pair, starts a new entry
        // even without a blank separator line.
        let starts_entry = match directive {
            Directive::Context => pending.has_content() || pending.seen_msgstr,
            Directive::Source => pending.seen_msgstr,
            _ => false,
        };
        if starts_entry {
            pending.finish(&mut entries);
        }
        if keyword.starts_with("msgstr") {
            pending.seen_msgstr = true;
        }

        pending.current = Some(directive);
        pending.append(&unquote(rest));
    }

    pending.finish(&mut entries);
    entries
}

/// Strip surrounding quotes and resolve escapes in a single pass, so that
/// `\\n` stays a literal backslash followed by `n`.
fn unquote(s: &str) -> String {
    let s = s.trim();
    let s = s.strip_prefix('"').unwrap_or(s);
    let s = s.strip_suffix('"').unwrap_or(s);

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
