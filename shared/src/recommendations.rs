//! Crop recommendation provider
//!
//! The recommendations are a fixed catalog: the same three crops come back for
//! every submitted form. Only the language of the text changes. There is no
//! scoring over soil, weather or location.

use crate::i18n::ResourceBundle;
use crate::models::{Crop, Difficulty, FarmDetails, Level};
use crate::types::Language;

/// Number of crops every recommendation contains
pub const RECOMMENDATION_COUNT: usize = 3;

pub static CATALOG: ResourceBundle<[Crop; RECOMMENDATION_COUNT]> = ResourceBundle::new(&[
    (
        Language::English,
        [
            Crop {
                name: "Rice (Basmati)",
                season: "Kharif",
                water_requirement: Level::High,
                profitability: Level::High,
                difficulty: Difficulty::Medium,
                description: "🌾 Great for your soil! Basmati rice sells well in market.",
                tips: &[
                    "🌧️ Plant in June-July",
                    "💧 Good drainage needed",
                    "🌿 Use organic fertilizer",
                    "🐛 Watch for pests",
                ],
                fertilizer: Some("NPK 10:26:26 at planting, Urea after 20 days"),
                warnings: &[
                    "⚠️ Heavy rain can cause flooding",
                    "🌡️ Very hot weather reduces yield",
                ],
            },
            Crop {
                name: "Wheat",
                season: "Rabi",
                water_requirement: Level::Medium,
                profitability: Level::Medium,
                difficulty: Difficulty::Easy,
                description: "🌾 Easy winter crop. Good for beginners. Stable prices.",
                tips: &[
                    "❄️ Sow in November-December",
                    "🌱 Use good quality seeds",
                    "💊 Apply fertilizer in parts",
                    "📏 Harvest when ready",
                ],
                fertilizer: Some("DAP at sowing, Urea in 2 splits after 21 & 45 days"),
                warnings: &["⚠️ Late sowing reduces yield", "🐛 Watch for rust disease"],
            },
            Crop {
                name: "Sugarcane",
                season: "Year-round",
                water_requirement: Level::High,
                profitability: Level::High,
                difficulty: Difficulty::Hard,
                description: "🎯 Long crop but very profitable. Needs care but worth it.",
                tips: &[
                    "🛡️ Choose disease-free variety",
                    "📏 Keep proper spacing",
                    "💧 Water every 7-10 days",
                    "⏱️ Harvest at 12-18 months",
                ],
                fertilizer: Some("NPK 12:32:16 + Micronutrients at planting"),
                warnings: &[
                    "⚠️ Needs lots of water",
                    "🌡️ Cold weather can damage crop",
                    "💰 High initial investment needed",
                ],
            },
        ],
    ),
    (
        Language::Hindi,
        [
            Crop {
                name: "चावल (बासमती)",
                season: "खरीफ",
                water_requirement: Level::High,
                profitability: Level::High,
                difficulty: Difficulty::Medium,
                description: "🌾 आपकी मिट्टी के लिए बढ़िया! बासमती चावल बाजार में अच्छा बिकता है।",
                tips: &[
                    "🌧️ जून-जुलाई में रोपाई करें",
                    "💧 अच्छी जल निकासी ज़रूरी है",
                    "🌿 जैविक खाद का उपयोग करें",
                    "🐛 कीटों पर नज़र रखें",
                ],
                fertilizer: Some("रोपाई के समय NPK 10:26:26, 20 दिन बाद यूरिया"),
                warnings: &[
                    "⚠️ भारी बारिश से बाढ़ आ सकती है",
                    "🌡️ बहुत गर्म मौसम से उपज कम होती है",
                ],
            },
            Crop {
                name: "गेहूं",
                season: "रबी",
                water_requirement: Level::Medium,
                profitability: Level::Medium,
                difficulty: Difficulty::Easy,
                description: "🌾 आसान सर्दी की फसल। नए किसानों के लिए अच्छी। स्थिर दाम।",
                tips: &[
                    "❄️ नवंबर-दिसंबर में बुआई करें",
                    "🌱 अच्छी गुणवत्ता के बीज लें",
                    "💊 खाद किस्तों में डालें",
                    "📏 पकने पर कटाई करें",
                ],
                fertilizer: Some("बुआई के समय DAP, 21 और 45 दिन बाद यूरिया दो हिस्सों में"),
                warnings: &["⚠️ देर से बुआई से उपज घटती है", "🐛 रतुआ रोग पर नज़र रखें"],
            },
            Crop {
                name: "गन्ना",
                season: "साल भर",
                water_requirement: Level::High,
                profitability: Level::High,
                difficulty: Difficulty::Hard,
                description: "🎯 लंबी फसल लेकिन बहुत मुनाफे वाली। मेहनत चाहिए पर फायदेमंद।",
                tips: &[
                    "🛡️ रोग-मुक्त किस्म चुनें",
                    "📏 सही दूरी रखें",
                    "💧 हर 7-10 दिन में पानी दें",
                    "⏱️ 12-18 महीने में कटाई करें",
                ],
                fertilizer: Some("रोपाई के समय NPK 12:32:16 + सूक्ष्म पोषक तत्व"),
                warnings: &[
                    "⚠️ बहुत पानी चाहिए",
                    "🌡️ ठंडा मौसम फसल को नुकसान पहुंचा सकता है",
                    "💰 शुरुआती निवेश ज़्यादा है",
                ],
            },
        ],
    ),
]);

/// Recommendations for a submitted form
///
/// Ignores every reading in `details`; only `details.language` picks the text.
pub fn get_recommendations(details: &FarmDetails) -> &'static [Crop; RECOMMENDATION_COUNT] {
    recommendations_in(details.language)
}

/// The fixed catalog in `language`, falling back to English
pub fn recommendations_in(language: Language) -> &'static [Crop; RECOMMENDATION_COUNT] {
    CATALOG.get(language)
}
