//! Built-in locale data.

use super::DateStyle;

/// Locale settings for date selection.
#[derive(Debug, Clone)]
pub struct Locale {
    /// BCP-47 tag in canonical casing, e.g. `"de-DE"`.
    pub tag: &'static str,
    pub date_pattern_short: &'static str,
    pub date_pattern_medium: &'static str,
    pub date_pattern_long: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl Locale {
    /// Canonical date pattern for the given style.
    pub fn date_pattern(&self, style: DateStyle) -> &'static str {
        match style {
            DateStyle::Short => self.date_pattern_short,
            DateStyle::Medium => self.date_pattern_medium,
            DateStyle::Long => self.date_pattern_long,
        }
    }

    /// Looks up a built-in locale by BCP-47 tag.
    ///
    /// Matching ignores case and treats `_` like `-`, so `"de_DE"` and
    /// `"DE-de"` both resolve. A bare language code resolves to that
    /// language's reference region, e.g. `"pt"` to `pt-BR`.
    pub fn for_tag(tag: &str) -> Option<Locale> {
        let normalized: String = tag
            .trim()
            .chars()
            .map(|c| if c == '_' { '-' } else { c.to_ascii_lowercase() })
            .collect();
        match normalized.as_str() {
            "en-us" | "en" => Some(Locale::en_us()),
            "en-gb" => Some(Locale::en_gb()),
            "de-de" | "de" => Some(Locale::de_de()),
            "fr-fr" | "fr" => Some(Locale::fr_fr()),
            "es-es" | "es" => Some(Locale::es_es()),
            "it-it" | "it" => Some(Locale::it_it()),
            "nl-nl" | "nl" => Some(Locale::nl_nl()),
            "pt-br" | "pt" => Some(Locale::pt_br()),
            "sv-se" | "sv" => Some(Locale::sv_se()),
            "da-dk" | "da" => Some(Locale::da_dk()),
            "pl-pl" | "pl" => Some(Locale::pl_pl()),
            "ru-ru" | "ru" => Some(Locale::ru_ru()),
            "ja-jp" | "ja" => Some(Locale::ja_jp()),
            "hu-hu" | "hu" => Some(Locale::hu_hu()),
            _ => None,
        }
    }

    /// US English locale.
    pub fn en_us() -> Self {
        Locale {
            tag: "en-US",
            date_pattern_short: "M/d/yy",
            date_pattern_medium: "MMM d, y",
            date_pattern_long: "MMMM d, y",
            month_names_short: [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ],
            month_names_full: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ],
        }
    }

    /// British English locale.
    pub fn en_gb() -> Self {
        Locale {
            tag: "en-GB",
            date_pattern_short: "dd/MM/y",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            ..Locale::en_us()
        }
    }

    /// German locale.
    pub fn de_de() -> Self {
        Locale {
            tag: "de-DE",
            date_pattern_short: "dd.MM.yy",
            date_pattern_medium: "dd.MM.y",
            date_pattern_long: "d. MMMM y",
            month_names_short: [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            month_names_full: [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ],
        }
    }

    /// French locale.
    pub fn fr_fr() -> Self {
        Locale {
            tag: "fr-FR",
            date_pattern_short: "dd/MM/y",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            month_names_short: [
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.",
                "nov.", "déc.",
            ],
            month_names_full: [
                "janvier",
                "février",
                "mars",
                "avril",
                "mai",
                "juin",
                "juillet",
                "août",
                "septembre",
                "octobre",
                "novembre",
                "décembre",
            ],
        }
    }

    /// Spanish locale.
    pub fn es_es() -> Self {
        Locale {
            tag: "es-ES",
            date_pattern_short: "d/M/yy",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d 'de' MMMM 'de' y",
            month_names_short: [
                "ene.", "feb.", "mar.", "abr.", "may.", "jun.", "jul.", "ago.", "sept.", "oct.",
                "nov.", "dic.",
            ],
            month_names_full: [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ],
        }
    }

    /// Italian locale.
    pub fn it_it() -> Self {
        Locale {
            tag: "it-IT",
            date_pattern_short: "dd/MM/yy",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            month_names_short: [
                "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set", "ott", "nov", "dic",
            ],
            month_names_full: [
                "gennaio",
                "febbraio",
                "marzo",
                "aprile",
                "maggio",
                "giugno",
                "luglio",
                "agosto",
                "settembre",
                "ottobre",
                "novembre",
                "dicembre",
            ],
        }
    }

    /// Dutch locale.
    pub fn nl_nl() -> Self {
        Locale {
            tag: "nl-NL",
            date_pattern_short: "dd-MM-y",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            month_names_short: [
                "jan.", "feb.", "mrt.", "apr.", "mei", "jun.", "jul.", "aug.", "sep.", "okt.",
                "nov.", "dec.",
            ],
            month_names_full: [
                "januari",
                "februari",
                "maart",
                "april",
                "mei",
                "juni",
                "juli",
                "augustus",
                "september",
                "oktober",
                "november",
                "december",
            ],
        }
    }

    /// Brazilian Portuguese locale.
    pub fn pt_br() -> Self {
        Locale {
            tag: "pt-BR",
            date_pattern_short: "dd/MM/y",
            date_pattern_medium: "d 'de' MMM 'de' y",
            date_pattern_long: "d 'de' MMMM 'de' y",
            month_names_short: [
                "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.", "set.", "out.",
                "nov.", "dez.",
            ],
            month_names_full: [
                "janeiro",
                "fevereiro",
                "março",
                "abril",
                "maio",
                "junho",
                "julho",
                "agosto",
                "setembro",
                "outubro",
                "novembro",
                "dezembro",
            ],
        }
    }

    /// Swedish locale.
    pub fn sv_se() -> Self {
        Locale {
            tag: "sv-SE",
            date_pattern_short: "y-MM-dd",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            month_names_short: [
                "jan.", "feb.", "mars", "apr.", "maj", "juni", "juli", "aug.", "sep.", "okt.",
                "nov.", "dec.",
            ],
            month_names_full: [
                "januari",
                "februari",
                "mars",
                "april",
                "maj",
                "juni",
                "juli",
                "augusti",
                "september",
                "oktober",
                "november",
                "december",
            ],
        }
    }

    /// Danish locale.
    pub fn da_dk() -> Self {
        Locale {
            tag: "da-DK",
            date_pattern_short: "dd.MM.y",
            date_pattern_medium: "d. MMM y",
            date_pattern_long: "d. MMMM y",
            month_names_short: [
                "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.",
                "nov.", "dec.",
            ],
            month_names_full: [
                "januar",
                "februar",
                "marts",
                "april",
                "maj",
                "juni",
                "juli",
                "august",
                "september",
                "oktober",
                "november",
                "december",
            ],
        }
    }

    /// Polish locale. Month names are the genitive forms used inside
    /// a formatted date.
    pub fn pl_pl() -> Self {
        Locale {
            tag: "pl-PL",
            date_pattern_short: "d.MM.y",
            date_pattern_medium: "d MMM y",
            date_pattern_long: "d MMMM y",
            month_names_short: [
                "sty", "lut", "mar", "kwi", "maj", "cze", "lip", "sie", "wrz", "paź", "lis", "gru",
            ],
            month_names_full: [
                "stycznia",
                "lutego",
                "marca",
                "kwietnia",
                "maja",
                "czerwca",
                "lipca",
                "sierpnia",
                "września",
                "października",
                "listopada",
                "grudnia",
            ],
        }
    }

    /// Russian locale. Month names are the genitive forms used inside
    /// a formatted date.
    pub fn ru_ru() -> Self {
        Locale {
            tag: "ru-RU",
            date_pattern_short: "dd.MM.y",
            date_pattern_medium: "d MMM y 'г'.",
            date_pattern_long: "d MMMM y 'г'.",
            month_names_short: [
                "янв.",
                "февр.",
                "мар.",
                "апр.",
                "мая",
                "июн.",
                "июл.",
                "авг.",
                "сент.",
                "окт.",
                "нояб.",
                "дек.",
            ],
            month_names_full: [
                "января",
                "февраля",
                "марта",
                "апреля",
                "мая",
                "июня",
                "июля",
                "августа",
                "сентября",
                "октября",
                "ноября",
                "декабря",
            ],
        }
    }

    /// Japanese locale.
    pub fn ja_jp() -> Self {
        Locale {
            tag: "ja-JP",
            date_pattern_short: "y/MM/dd",
            date_pattern_medium: "y/MM/dd",
            date_pattern_long: "y年M月d日",
            month_names_short: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
            month_names_full: [
                "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月",
                "12月",
            ],
        }
    }

    /// Hungarian locale.
    pub fn hu_hu() -> Self {
        Locale {
            tag: "hu-HU",
            date_pattern_short: "y. MM. dd.",
            date_pattern_medium: "y. MMM d.",
            date_pattern_long: "y. MMMM d.",
            month_names_short: [
                "jan.", "febr.", "márc.", "ápr.", "máj.", "jún.", "júl.", "aug.", "szept.",
                "okt.", "nov.", "dec.",
            ],
            month_names_full: [
                "január",
                "február",
                "március",
                "április",
                "május",
                "június",
                "július",
                "augusztus",
                "szeptember",
                "október",
                "november",
                "december",
            ],
        }
    }
}
