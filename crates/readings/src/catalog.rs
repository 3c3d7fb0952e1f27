use crate::error::CatalogError;
use crate::sensor::SensorKind;

const EN_LABELS: [&str; 8] = [
    "Chlorine",
    "Oxygen saturation",
    "Dissolved oxygen",
    "pH",
    "Pressure",
    "Salinity",
    "Air temperature",
    "Water temperature",
];

const FR_LABELS: [&str; 8] = [
    "Chlore",
    "Saturation en oxygène",
    "Oxygène dissous",
    "pH",
    "Pression",
    "Salinité",
    "Température de l'air",
    "Température de l'eau",
];

const VI_LABELS: [&str; 8] = [
    "Clo",
    "Độ bão hòa oxy",
    "Oxy hòa tan",
    "Độ pH",
    "Áp suất",
    "Độ mặn",
    "Nhiệt độ không khí",
    "Nhiệt độ nước",
];

const EN_NO_DATA: &str = "No data. Refresh the page or check database connection.";
const FR_NO_DATA: &str =
    "Pas de données. Actualisez la page ou vérifiez la connexion à la base de données.";
const VI_NO_DATA: &str =
    "Không có dữ liệu. Hãy tải lại trang hoặc kiểm tra kết nối cơ sở dữ liệu.";

/// The languages the station pages are published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Fr,
    Vi,
}

impl Language {
    /// Detect the page language from a URL or an `html[lang]` attribute.
    ///
    /// Anything that mentions neither `en` nor `fr` is treated as
    /// Vietnamese, the station's default locale.
    pub fn detect(url_or_lang: &str) -> Language {
        if url_or_lang.contains("en") {
            Language::En
        } else if url_or_lang.contains("fr") {
            Language::Fr
        } else {
            Language::Vi
        }
    }
}

/// The per-language sensor label catalog.
///
/// Built once per page session and immutable afterwards; navigating to a
/// page in another language builds a new catalog. Labels are
/// index-aligned with [`SensorKind::ALL`].
#[derive(Debug)]
pub struct SensorCatalog {
    language: Language,
    labels: &'static [&'static str; 8],
}

impl SensorCatalog {
    pub fn new(language: Language) -> SensorCatalog {
        let labels = match language {
            Language::En => &EN_LABELS,
            Language::Fr => &FR_LABELS,
            Language::Vi => &VI_LABELS,
        };

        Self { language, labels }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The eight display labels, in catalog order.
    pub fn labels(&self) -> &[&'static str; 8] {
        self.labels
    }

    pub fn label_for(&self, kind: SensorKind) -> &'static str {
        self.labels[kind as usize]
    }

    /// Map a display label back to its sensor kind.
    ///
    /// Labels reach this from page controls, not free user text; a label
    /// outside the table fails before any request is built from it.
    pub fn kind_for_label(&self, label: &str) -> Result<SensorKind, CatalogError> {
        self.labels
            .iter()
            .position(|l| *l == label)
            .map(|index| SensorKind::ALL[index])
            .ok_or_else(|| CatalogError::UnknownSensorLabel {
                label: label.to_owned(),
            })
    }

    /// The localized text of the no-data overlay.
    pub fn no_data_message(&self) -> &'static str {
        match self.language {
            Language::En => EN_NO_DATA,
            Language::Fr => FR_NO_DATA,
            Language::Vi => VI_NO_DATA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [Language; 3] = [Language::En, Language::Fr, Language::Vi];

    #[test]
    fn every_language_has_eight_labels() {
        for language in LANGUAGES {
            let catalog = SensorCatalog::new(language);

            assert_eq!(catalog.labels().len(), 8);
        }
    }

    #[test]
    fn labels_round_trip_at_every_index() {
        for language in LANGUAGES {
            let catalog = SensorCatalog::new(language);

            for (index, label) in catalog.labels().iter().enumerate() {
                let actual_kind = catalog.kind_for_label(label).unwrap();

                assert_eq!(actual_kind, SensorKind::ALL[index]);
            }
        }
    }

    #[test]
    fn label_for_is_the_inverse_of_kind_for_label() {
        for language in LANGUAGES {
            let catalog = SensorCatalog::new(language);

            for kind in SensorKind::ALL {
                let label = catalog.label_for(kind);

                assert_eq!(catalog.kind_for_label(label).unwrap(), kind);
            }
        }
    }

    #[test]
    fn unknown_labels_fail() {
        let catalog = SensorCatalog::new(Language::En);

        let error = catalog.kind_for_label("Humidity").unwrap_err();

        assert_eq!(
            error,
            CatalogError::UnknownSensorLabel {
                label: String::from("Humidity")
            }
        );
    }

    #[test]
    fn detect_prefers_english() {
        assert_eq!(Language::detect("https://site/en/about.html"), Language::En);
        assert_eq!(Language::detect("en"), Language::En);
    }

    #[test]
    fn detect_finds_french_when_english_is_absent() {
        assert_eq!(
            Language::detect("https://site/fr/details.html"),
            Language::Fr
        );
        assert_eq!(Language::detect("fr"), Language::Fr);
    }

    #[test]
    fn detect_defaults_to_vietnamese() {
        assert_eq!(Language::detect("https://site/about.html"), Language::Vi);
        assert_eq!(Language::detect(""), Language::Vi);
    }
}
