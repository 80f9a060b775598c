//! Display helpers applied at render time.
//!
//! Upstream strings arrive in game-engine form: asset paths in mixed case with
//! texture extensions, and descriptions with markup tags and `@Variable@`
//! placeholders. Nothing here touches the network or the view model.

use std::collections::BTreeMap;

/// Rewrite a raw asset path into a displayable image URL.
///
/// The path is lowercased, the first `.dds` and then the first `.tex`
/// extension become `.png`, and the result is appended to `base`. Empty paths
/// yield an empty string so the caller can fall back to [`fallback_glyph`].
/// Paths that are already absolute URLs are returned unchanged.
///
/// # Examples
/// ```
/// use tactidex_types::formatting::icon_url;
/// let base = "https://raw.communitydragon.org/latest/game/";
/// assert_eq!(
///     icon_url(base, "ASSETS/UX/TFT/ChampionSplashes/TFT_Ahri.TFT_Set14.dds"),
///     "https://raw.communitydragon.org/latest/game/assets/ux/tft/championsplashes/tft_ahri.tft_set14.png"
/// );
/// assert_eq!(icon_url(base, ""), "");
/// ```
pub fn icon_url(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let normalized = path
        .to_lowercase()
        .replacen(".dds", ".png", 1)
        .replacen(".tex", ".png", 1);
    format!("{base}{normalized}")
}

/// Placeholder shown when an icon fails to load: the first letter of the name.
///
/// # Examples
/// ```
/// use tactidex_types::formatting::fallback_glyph;
/// assert_eq!(fallback_glyph("Ahri"), 'A');
/// assert_eq!(fallback_glyph(""), '?');
/// ```
pub fn fallback_glyph(name: &str) -> char {
    name.chars().next().unwrap_or('?')
}

/// Format an effect value the way the upstream tooling prints numbers
/// (no trailing `.0` on whole values).
///
/// # Examples
/// ```
/// use tactidex_types::formatting::format_effect_value;
/// assert_eq!(format_effect_value(10.0), "10");
/// assert_eq!(format_effect_value(0.25), "0.25");
/// ```
pub fn format_effect_value(value: f64) -> String {
    format!("{value}")
}

/// Strip markup and substitute `@Variable@` placeholders with effect values.
///
/// A placeholder may carry a scale suffix (`@Damage*100@`); only the part
/// before `*` is looked up. Unknown variables are left in place so missing
/// data stays visible.
///
/// # Examples
/// ```
/// use std::collections::BTreeMap;
/// use tactidex_types::formatting::clean_description;
/// let effects = BTreeMap::from([("AD".to_string(), 15.0)]);
/// assert_eq!(
///     clean_description("Gain <b>@AD@</b> Attack Damage and @Missing@.", &effects),
///     "Gain 15 Attack Damage and @Missing@."
/// );
/// ```
pub fn clean_description(desc: &str, effects: &BTreeMap<String, f64>) -> String {
    replace_placeholders(&strip_tags(desc), |inner| {
        let var_name = inner.split('*').next().unwrap_or(inner);
        effects.get(var_name).map(|v| format_effect_value(*v))
    })
}

/// Strip markup and drop every `@...@` placeholder.
///
/// Used for trait descriptions, whose variables live on the breakpoints
/// rather than the trait itself.
///
/// # Examples
/// ```
/// use tactidex_types::formatting::strip_placeholders;
/// assert_eq!(strip_placeholders("<i>Gain @Armor@ Armor</i>"), "Gain  Armor");
/// ```
pub fn strip_placeholders(desc: &str) -> String {
    replace_placeholders(&strip_tags(desc), |_| Some(String::new()))
}

/// Remove `<...>` tags. An unterminated `<` is kept as text.
fn strip_tags(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        let Some(close) = rest[open..].find('>') else {
            break;
        };
        result.push_str(&rest[..open]);
        rest = &rest[open + close + 1..];
    }
    result.push_str(rest);
    result
}

/// Replace each `@inner@` span using `lookup`; `None` keeps the span verbatim.
fn replace_placeholders<F>(s: &str, mut lookup: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('@') {
        let Some(len) = rest[open + 1..].find('@') else {
            break;
        };
        let inner = &rest[open + 1..open + 1 + len];
        result.push_str(&rest[..open]);
        match lookup(inner) {
            Some(replacement) => result.push_str(&replacement),
            None => result.push_str(&rest[open..open + len + 2]),
        }
        rest = &rest[open + len + 2..];
    }
    result.push_str(rest);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cdn.test/game/";

    #[test]
    fn test_icon_url_replaces_legacy_extensions() {
        assert_eq!(icon_url(BASE, "ASSETS/Items/Icon.TEX"), "https://cdn.test/game/assets/items/icon.png");
        assert_eq!(icon_url(BASE, "a/b.dds"), "https://cdn.test/game/a/b.png");
        // Only the first occurrence is rewritten
        assert_eq!(icon_url(BASE, "a.dds/b.dds"), "https://cdn.test/game/a.png/b.dds");
    }

    #[test]
    fn test_icon_url_passes_absolute_urls() {
        let url = "https://ddragon.leagueoflegends.com/cdn/16.4.1/img/tft-augment/A.png";
        assert_eq!(icon_url(BASE, url), url);
    }

    #[test]
    fn test_clean_description_scaled_placeholder() {
        let effects = BTreeMap::from([("Bonus".to_string(), 0.3)]);
        assert_eq!(clean_description("+@Bonus*100@%", &effects), "+0.3%");
    }

    #[test]
    fn test_clean_description_unterminated() {
        let effects = BTreeMap::new();
        assert_eq!(clean_description("a < b @open", &effects), "a < b @open");
        assert_eq!(clean_description("x<br>y", &effects), "xy");
    }

    #[test]
    fn test_strip_placeholders() {
        assert_eq!(strip_placeholders("@A@ and @B@"), " and ");
        assert_eq!(strip_placeholders("<row>(2) @X@ Armor</row><br>"), "(2)  Armor");
    }

    #[test]
    fn test_fallback_glyph_multibyte() {
        assert_eq!(fallback_glyph("Émile"), 'É');
    }
}
