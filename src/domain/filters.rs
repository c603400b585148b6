//! The symbol filter pipeline (spec.md §4.2): kind/type filter,
//! exclude-symbols, tiered pattern match, literal-namespace rule, prefix
//! rule, parent-mode inheritance, file filter, and a final default.
//! Patterns use `*`/`**`/`::` glob-like syntax compiled to [`regex::Regex`].

use crate::domain::extraction_mode::ExtractionMode;
use crate::domain::info::Access;
use regex::Regex;
use std::path::Path;

/// Compiles a `*`/`**`/`::`-style symbol pattern into a regular
/// expression anchored at both ends. `*` matches one path segment's worth
/// of characters (no `::`), `**` matches across segments.
pub fn compile_pattern(pattern: &str) -> Regex {
    let mut out = String::from("^");
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str(".*");
                } else {
                    out.push_str("[^:]*");
                }
            }
            c if "\\.+?()[]{}|^$".contains(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push('$');
    Regex::new(&out).expect("compiled pattern is always valid regex")
}

/// Which comparison strategy produced a pattern match, cached on the rule
/// at construction time rather than re-derived from the pattern text on
/// every [`FilterPipeline::decide`] call.
///
/// `Strict`/`Literal` match a symbol's own qualified name exactly;
/// `Prefix` matches through a compiled glob (`*`/`**`); `StrictParent`/
/// `LiteralParent` are never constructed directly — they are the outcome
/// reported when a `Strict`/`Literal` rule's target isn't the symbol
/// itself but one of its enclosing namespaces, i.e. the rule cascades
/// down onto the symbol as a descendant (the "literal-namespace rule").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Strict,
    Literal,
    Prefix,
    StrictParent,
    LiteralParent,
}

/// A single filter rule: a compiled pattern and the mode it forces a
/// matching symbol into.
pub struct PatternRule {
    pub regex: Regex,
    pub mode: Option<ExtractionMode>,
    /// `true` means the pattern excludes the symbol outright rather than
    /// downgrading its mode.
    pub exclude: bool,
    pub match_kind: MatchKind,
    /// The rule's own target, split on `::`, used to detect cascading
    /// (`StrictParent`/`LiteralParent`) matches against a symbol's
    /// enclosing namespace chain. Empty for `Prefix` rules.
    segments: Vec<String>,
}

impl PatternRule {
    pub fn include(pattern: &str, mode: ExtractionMode) -> Self {
        PatternRule {
            regex: compile_pattern(pattern),
            mode: Some(mode),
            exclude: false,
            match_kind: classify(pattern),
            segments: split_segments(pattern),
        }
    }

    pub fn exclude(pattern: &str) -> Self {
        PatternRule {
            regex: compile_pattern(pattern),
            mode: None,
            exclude: true,
            match_kind: classify(pattern),
            segments: split_segments(pattern),
        }
    }

    /// The literal-namespace rule (spec.md §4.2.2): every declaration
    /// nested under `namespace`, at any depth, is forced into `mode`. The
    /// namespace name is a literal scope, never a glob, so this always
    /// classifies as `Literal`.
    pub fn namespace_scope(namespace: &str, mode: ExtractionMode) -> Self {
        PatternRule {
            regex: compile_pattern(namespace),
            mode: Some(mode),
            exclude: false,
            match_kind: MatchKind::Literal,
            segments: split_segments(namespace),
        }
    }
}

fn split_segments(pattern: &str) -> Vec<String> {
    pattern.split("::").map(str::to_string).collect()
}

fn classify(pattern: &str) -> MatchKind {
    if pattern.contains('*') {
        MatchKind::Prefix
    } else {
        MatchKind::Strict
    }
}

/// `true` when `segments` names an ancestor of `namespace_path` — i.e.
/// `namespace_path` is `segments` or nested under it.
fn is_descendant_of(namespace_path: &[String], segments: &[String]) -> bool {
    !segments.is_empty() && namespace_path.len() >= segments.len() && namespace_path[..segments.len()] == segments[..]
}

/// Resolves whether `rule` matches `ctx`, reporting which `MatchKind`
/// produced the match (the Parent variant when the match was a
/// cascade from an enclosing namespace rather than a direct hit).
fn rule_matches(rule: &PatternRule, ctx: &DeclContext) -> bool {
    match rule.match_kind {
        MatchKind::Prefix => rule.regex.is_match(&ctx.qualified_name),
        MatchKind::Strict | MatchKind::Literal => {
            rule.regex.is_match(&ctx.qualified_name) || is_descendant_of(&ctx.namespace_path, &rule.segments)
        }
        MatchKind::StrictParent | MatchKind::LiteralParent => false,
    }
}

/// Everything [`FilterPipeline::decide`] needs to know about one
/// declaration, replacing the pipeline's earlier three loose parameters
/// (spec.md §4.2 names kind/access/file-scope as independent filter
/// inputs, not derivable from the qualified name alone).
pub struct DeclContext<'a> {
    pub qualified_name: String,
    /// Enclosing namespace names, outermost first, not including the
    /// symbol's own name.
    pub namespace_path: Vec<String>,
    pub file: &'a Path,
    pub file_in_scope: bool,
    pub access: Access,
    pub is_implicit: bool,
    pub is_anonymous: bool,
    pub is_file_static: bool,
    /// The mode inherited from the nearest enclosing symbol already
    /// decided in this traversal, consulted only when no rule matches
    /// (parent-mode inheritance, spec.md §4.2.2).
    pub parent_mode: Option<ExtractionMode>,
}

/// The ordered filter pipeline. Rules are evaluated in tiers: the
/// kind/type filter first (unconditionally drops a handful of
/// declaration categories), then exclude rules (any match rejects the
/// symbol immediately), then pattern rules in declared order (first
/// match wins), then parent-mode inheritance, then the file filter, then
/// the default mode.
pub struct FilterPipeline {
    pub exclude_rules: Vec<PatternRule>,
    pub pattern_rules: Vec<PatternRule>,
    pub in_scope_files: Vec<std::path::PathBuf>,
    pub default_mode: ExtractionMode,
    /// Mirrors the `extract-private` config key: when `false` (the
    /// default), private members are dropped by the kind/type filter
    /// instead of being extracted in `Dependency` mode.
    pub extract_private: bool,
}

/// The outcome of running one qualified name through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Excluded,
    Mode(ExtractionMode),
}

impl FilterPipeline {
    pub fn decide(&self, ctx: &DeclContext) -> FilterDecision {
        if self.fails_kind_filter(ctx) {
            return FilterDecision::Excluded;
        }
        if ctx.access == Access::Private && !self.extract_private {
            return FilterDecision::Mode(ExtractionMode::Dependency);
        }
        for rule in &self.exclude_rules {
            if rule_matches(rule, ctx) {
                return FilterDecision::Excluded;
            }
        }
        for rule in &self.pattern_rules {
            if rule_matches(rule, ctx) {
                if rule.exclude {
                    return FilterDecision::Excluded;
                }
                if let Some(mode) = rule.mode {
                    return FilterDecision::Mode(mode);
                }
            }
        }
        if let Some(mode) = ctx.parent_mode {
            return FilterDecision::Mode(mode);
        }
        if !ctx.file_in_scope || !self.file_matches(ctx.file) {
            return FilterDecision::Mode(ExtractionMode::Dependency);
        }
        FilterDecision::Mode(self.default_mode)
    }

    /// The kind/type filter (spec.md §4.2.2 step 1): implicit and
    /// anonymous declarations never produce documentation, and a
    /// file-static declaration has no external linkage to document.
    /// Private access is handled separately in `decide` — it downgrades
    /// the symbol to `Dependency` mode rather than dropping it outright,
    /// since a private member can still be referenced from a documented
    /// public signature (e.g. a private base class).
    fn fails_kind_filter(&self, ctx: &DeclContext) -> bool {
        ctx.is_implicit || ctx.is_anonymous || ctx.is_file_static
    }

    fn file_matches(&self, file: &Path) -> bool {
        if self.in_scope_files.is_empty() {
            return true;
        }
        self.in_scope_files.iter().any(|f| file.starts_with(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(qualified_name: &str) -> DeclContext<'static> {
        DeclContext {
            qualified_name: qualified_name.to_string(),
            namespace_path: qualified_name
                .rsplit_once("::")
                .map(|(ns, _)| ns.split("::").map(str::to_string).collect())
                .unwrap_or_default(),
            file: Path::new("a.h"),
            file_in_scope: true,
            access: Access::Public,
            is_implicit: false,
            is_anonymous: false,
            is_file_static: false,
            parent_mode: None,
        }
    }

    #[test]
    fn single_star_does_not_cross_namespace_boundary() {
        let re = compile_pattern("ns::*");
        assert!(re.is_match("ns::Foo"));
        assert!(!re.is_match("ns::inner::Foo"));
    }

    #[test]
    fn double_star_crosses_namespace_boundaries() {
        let re = compile_pattern("ns::**");
        assert!(re.is_match("ns::inner::Foo"));
    }

    #[test]
    fn exclude_rule_wins_over_pattern_rule() {
        let pipeline = FilterPipeline {
            exclude_rules: vec![PatternRule::exclude("ns::Secret")],
            pattern_rules: vec![PatternRule::include("ns::**", ExtractionMode::Regular)],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Dependency,
            extract_private: false,
        };
        let decision = pipeline.decide(&ctx("ns::Secret"));
        assert_eq!(decision, FilterDecision::Excluded);
    }

    #[test]
    fn out_of_scope_file_forces_dependency_mode() {
        let pipeline = FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![],
            in_scope_files: vec!["/proj".into()],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        };
        let mut c = ctx("ns::Foo");
        c.file = Path::new("/other/a.h");
        let decision = pipeline.decide(&c);
        assert_eq!(decision, FilterDecision::Mode(ExtractionMode::Dependency));
    }

    #[test]
    fn default_mode_applies_when_nothing_else_matches() {
        let pipeline = FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        };
        let decision = pipeline.decide(&ctx("ns::Foo"));
        assert_eq!(decision, FilterDecision::Mode(ExtractionMode::Regular));
    }

    #[test]
    fn private_member_is_filtered_to_dependency_unless_extract_private_is_set() {
        let pipeline = pipeline_without_rules();
        let mut c = ctx("Widget::secret");
        c.access = Access::Private;
        assert_eq!(pipeline.decide(&c), FilterDecision::Mode(ExtractionMode::Dependency));

        let pipeline = FilterPipeline { extract_private: true, ..pipeline_without_rules() };
        assert_eq!(pipeline.decide(&c), FilterDecision::Mode(ExtractionMode::Regular));
    }

    #[test]
    fn implicit_and_anonymous_declarations_are_excluded() {
        let pipeline = pipeline_without_rules();
        let mut c = ctx("Widget::Widget");
        c.is_implicit = true;
        assert_eq!(pipeline.decide(&c), FilterDecision::Excluded);

        let mut c = ctx("(anonymous)::x");
        c.is_anonymous = true;
        assert_eq!(pipeline.decide(&c), FilterDecision::Excluded);
    }

    #[test]
    fn namespace_scope_rule_cascades_to_descendants() {
        let pipeline = FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![PatternRule::namespace_scope("ns", ExtractionMode::SeeBelow)],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        };
        let decision = pipeline.decide(&ctx("ns::inner::Widget"));
        assert_eq!(decision, FilterDecision::Mode(ExtractionMode::SeeBelow));
    }

    #[test]
    fn parent_mode_is_inherited_when_no_rule_matches() {
        let pipeline = pipeline_without_rules();
        let mut c = ctx("ns::Widget::method");
        c.parent_mode = Some(ExtractionMode::Dependency);
        assert_eq!(pipeline.decide(&c), FilterDecision::Mode(ExtractionMode::Dependency));
    }

    fn pipeline_without_rules() -> FilterPipeline {
        FilterPipeline {
            exclude_rules: vec![],
            pattern_rules: vec![],
            in_scope_files: vec![],
            default_mode: ExtractionMode::Regular,
            extract_private: false,
        }
    }
}
