//! String tables for every screen, English first

use serde::Serialize;

use super::ResourceBundle;
use crate::types::Language;

// ============================================================================
// Landing
// ============================================================================

/// A feature card or a numbered step on the landing page
#[derive(Debug, Serialize)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Debug, Serialize)]
pub struct LandingStrings {
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub start_now: &'static str,
    pub works_on_mobile: &'static str,
    pub features_heading: &'static str,
    pub features: [Highlight; 4],
    pub steps_heading: &'static str,
    pub steps: [Highlight; 3],
    pub start_farming: &'static str,
}

pub static LANDING: ResourceBundle<LandingStrings> = ResourceBundle::new(&[
    (
        Language::English,
        LandingStrings {
            hero_title: "🌾 Grow Better Crops",
            hero_subtitle: "Simple farming advice in your language",
            start_now: "🚀 Start Now",
            works_on_mobile: "Works on mobile",
            features_heading: "✨ Why Farmers Love Us",
            features: [
                Highlight { icon: "🌱", title: "Smart Advice", text: "Best crops for your soil & weather" },
                Highlight { icon: "🗣️", title: "Your Language", text: "Tips in Hindi, Tamil & more" },
                Highlight { icon: "👨‍🌾", title: "Easy to Use", text: "Simple steps, big results" },
                Highlight { icon: "📱", title: "Mobile Ready", text: "Works on any phone" },
            ],
            steps_heading: "🚀 3 Simple Steps",
            steps: [
                Highlight { icon: "📍", title: "Tell Us About Your Farm", text: "Location, soil & weather" },
                Highlight { icon: "🤖", title: "Get Smart Tips", text: "Best crops for you" },
                Highlight { icon: "💰", title: "Grow & Profit", text: "Follow tips, earn more" },
            ],
            start_farming: "🌾 Start Farming Better",
        },
    ),
    (
        Language::Hindi,
        LandingStrings {
            hero_title: "🌾 बेहतर फसल उगाएं",
            hero_subtitle: "आपकी भाषा में आसान खेती सलाह",
            start_now: "🚀 अभी शुरू करें",
            works_on_mobile: "मोबाइल पर चलता है",
            features_heading: "✨ किसान हमें क्यों पसंद करते हैं",
            features: [
                Highlight { icon: "🌱", title: "स्मार्ट सलाह", text: "आपकी मिट्टी और मौसम के लिए सबसे अच्छी फसलें" },
                Highlight { icon: "🗣️", title: "आपकी भाषा", text: "हिंदी, तमिल और अन्य भाषाओं में सुझाव" },
                Highlight { icon: "👨‍🌾", title: "उपयोग में आसान", text: "आसान कदम, बड़े नतीजे" },
                Highlight { icon: "📱", title: "मोबाइल के लिए तैयार", text: "किसी भी फोन पर चलता है" },
            ],
            steps_heading: "🚀 3 आसान कदम",
            steps: [
                Highlight { icon: "📍", title: "अपने खेत के बारे में बताएं", text: "स्थान, मिट्टी और मौसम" },
                Highlight { icon: "🤖", title: "स्मार्ट सुझाव पाएं", text: "आपके लिए सबसे अच्छी फसलें" },
                Highlight { icon: "💰", title: "उगाएं और कमाएं", text: "सुझाव अपनाएं, ज़्यादा कमाएं" },
            ],
            start_farming: "🌾 बेहतर खेती शुरू करें",
        },
    ),
]);

// ============================================================================
// Language selection
// ============================================================================

/// The selection screen is bilingual on purpose, so it has a single record.
#[derive(Debug, Serialize)]
pub struct LanguageSelectStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub static LANGUAGE_SELECT: ResourceBundle<LanguageSelectStrings> = ResourceBundle::new(&[(
    Language::English,
    LanguageSelectStrings {
        title: "Choose Your Language",
        subtitle: "भाषा चुनें • Choose Language",
    },
)]);

// ============================================================================
// Form
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SoilTypeLabels {
    pub clay: &'static str,
    pub sandy: &'static str,
    pub loamy: &'static str,
    pub silt: &'static str,
    pub peaty: &'static str,
    pub chalky: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormStrings {
    pub page_title: &'static str,
    pub back_to_home: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub location: &'static str,
    pub location_placeholder: &'static str,
    pub language: &'static str,
    pub selected: &'static str,
    pub temperature: &'static str,
    pub rainfall: &'static str,
    pub soil_type: &'static str,
    pub soil_type_placeholder: &'static str,
    pub soil_ph: &'static str,
    pub soil_ph_hint: &'static str,
    pub farm_size: &'static str,
    pub auto_detect: &'static str,
    pub auto_detect_hint: &'static str,
    pub submit: &'static str,
    pub soil_types: SoilTypeLabels,
}

pub static FORM: ResourceBundle<FormStrings> = ResourceBundle::new(&[
    (
        Language::English,
        FormStrings {
            page_title: "Crop Recommendation System",
            back_to_home: "← Back to Home",
            title: "Farm Details",
            subtitle: "Quick info about your farm",
            location: "📍 Your Location",
            location_placeholder: "City or District",
            language: "🗣️ Language",
            selected: "Selected:",
            temperature: "🌡️ Temperature (°C)",
            rainfall: "🌧️ Yearly Rain (mm)",
            soil_type: "🏔️ Soil Type",
            soil_type_placeholder: "Pick your soil type",
            soil_ph: "🧪 Soil pH (Acid/Base)",
            soil_ph_hint: "💡 Normal range: 6.0-7.5",
            farm_size: "🚜 Farm Size (acres)",
            auto_detect: "📍 Enable Location (Demo)",
            auto_detect_hint: "Sample data will be filled",
            submit: "🚀 Get My Crop Advice",
            soil_types: SoilTypeLabels {
                clay: "🧱 Clay (Heavy)",
                sandy: "🏖️ Sandy (Light)",
                loamy: "🌱 Loamy (Best)",
                silt: "💧 Silt (Smooth)",
                peaty: "🌿 Peaty (Dark)",
                chalky: "⚪ Chalky (White)",
            },
        },
    ),
    (
        Language::Hindi,
        FormStrings {
            page_title: "फसल सलाह प्रणाली",
            back_to_home: "← होम पर वापस",
            title: "खेत की जानकारी",
            subtitle: "अपने खेत के बारे में बताएं",
            location: "📍 आपका स्थान",
            location_placeholder: "शहर या जिला",
            language: "🗣️ भाषा",
            selected: "चुनी गई:",
            temperature: "🌡️ तापमान (°C)",
            rainfall: "🌧️ वार्षिक बारिश (mm)",
            soil_type: "🏔️ मिट्टी का प्रकार",
            soil_type_placeholder: "अपनी मिट्टी चुनें",
            soil_ph: "🧪 मिट्टी का pH",
            soil_ph_hint: "💡 सामान्य रेंज: 6.0-7.5",
            farm_size: "🚜 खेत का आकार (एकड़)",
            auto_detect: "📍 स्थान चालू करें (डेमो)",
            auto_detect_hint: "नमूना डेटा भरा जाएगा",
            submit: "🚀 फसल की सलाह पाएं",
            soil_types: SoilTypeLabels {
                clay: "🧱 चिकनी मिट्टी",
                sandy: "🏖️ रेतीली मिट्टी",
                loamy: "🌱 दोमट मिट्टी (सबसे अच्छी)",
                silt: "💧 गाद मिट्टी",
                peaty: "🌿 पीट मिट्टी",
                chalky: "⚪ चूना मिट्टी",
            },
        },
    ),
]);

// ============================================================================
// Results
// ============================================================================

/// Display names for a Low/Medium/High scale
#[derive(Debug, Serialize)]
pub struct LevelNames {
    pub low: &'static str,
    pub medium: &'static str,
    pub high: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DifficultyNames {
    pub easy: &'static str,
    pub medium: &'static str,
    pub hard: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResultsStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub home: &'static str,
    pub change_details: &'static str,
    pub season_label: &'static str,
    pub profit_label: &'static str,
    pub water_label: &'static str,
    pub level_label: &'static str,
    pub warnings: &'static str,
    pub fertilizer_guide: &'static str,
    pub quick_tips: &'static str,
    pub pro_tip: &'static str,
    pub pro_tip_text: &'static str,
    pub profit_levels: LevelNames,
    pub water_levels: LevelNames,
    pub difficulty_levels: DifficultyNames,
}

pub static RESULTS: ResourceBundle<ResultsStrings> = ResourceBundle::new(&[
    (
        Language::English,
        ResultsStrings {
            title: "🌾 Your Perfect Crops",
            subtitle: "Best choices for your farm",
            home: "🏠 Home",
            change_details: "← Change Details",
            season_label: "📅 Season:",
            profit_label: "Profit",
            water_label: "Water:",
            level_label: "Level:",
            warnings: "⚠️ Important Warnings",
            fertilizer_guide: "🌿 Fertilizer Guide",
            quick_tips: "💡 Quick Tips",
            pro_tip: "Pro Tip",
            pro_tip_text: "Talk to local farmers and experts before planting. Market prices change often!",
            profit_levels: LevelNames { low: "Low", medium: "Medium", high: "High" },
            water_levels: LevelNames { low: "Low", medium: "Medium", high: "High" },
            difficulty_levels: DifficultyNames { easy: "Easy", medium: "Medium", hard: "Hard" },
        },
    ),
    (
        Language::Hindi,
        ResultsStrings {
            title: "🌾 आपकी सबसे अच्छी फसलें",
            subtitle: "आपके खेत के लिए सबसे अच्छे विकल्प",
            home: "🏠 होम",
            change_details: "← विवरण बदलें",
            season_label: "📅 मौसम:",
            profit_label: "मुनाफा",
            water_label: "पानी:",
            level_label: "स्तर:",
            warnings: "⚠️ महत्वपूर्ण चेतावनी",
            fertilizer_guide: "🌿 खाद गाइड",
            quick_tips: "💡 त्वरित सुझाव",
            pro_tip: "प्रो टिप",
            pro_tip_text: "बुआई से पहले स्थानीय किसानों और विशेषज्ञों से बात करें। बाजार की कीमतें बदलती रहती हैं!",
            profit_levels: LevelNames { low: "कम", medium: "मध्यम", high: "उच्च" },
            water_levels: LevelNames { low: "कम", medium: "मध्यम", high: "अधिक" },
            difficulty_levels: DifficultyNames { easy: "आसान", medium: "मध्यम", hard: "कठिन" },
        },
    ),
]);

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ChatStrings {
    pub title: &'static str,
    pub placeholder: &'static str,
    /// First bot message when the overlay opens
    pub greeting: &'static str,
    /// Questions the simulated voice input can "hear"
    pub samples: [&'static str; 3],
    /// Canned bot replies
    pub responses: [&'static str; 3],
    pub listening: &'static str,
}

pub static CHAT: ResourceBundle<ChatStrings> = ResourceBundle::new(&[
    (
        Language::English,
        ChatStrings {
            title: "🤖 Farm Assistant",
            placeholder: "Ask about crops, soil, weather...",
            greeting: "Hello! I'm here to help with your farming. What would you like to know?",
            samples: [
                "Which crop should I grow?",
                "What's the best fertilizer?",
                "When to plant wheat?",
            ],
            responses: [
                "Based on your soil and weather, Wheat is suitable for your area.",
                "For your soil type, NPK fertilizer works best. Apply 50kg per acre.",
                "Best time to plant wheat is November-December in your region.",
            ],
            listening: "🎤 Listening... (Demo mode)",
        },
    ),
    (
        Language::Hindi,
        ChatStrings {
            title: "🤖 खेती सहायक",
            placeholder: "फसल, मिट्टी, मौसम के बारे में पूछें...",
            greeting: "नमस्ते! मैं आपकी खेती में मदद करूंगा। क्या पूछना चाहते हैं?",
            samples: [
                "मुझे कौन सी फसल उगानी चाहिए?",
                "सबसे अच्छा खाद कौन सा है?",
                "गेहूं कब लगाना चाहिए?",
            ],
            responses: [
                "आपकी मिट्टी और मौसम के अनुसार गेहूं उपयुक्त है।",
                "आपकी मिट्टी के लिए NPK खाद सबसे अच्छा है। 50 किलो प्रति एकड़ डालें।",
                "आपके क्षेत्र में गेहूं लगाने का सबसे अच्छा समय नवंबर-दिसंबर है।",
            ],
            listening: "🎤 सुन रहे हैं... (डेमो मोड)",
        },
    ),
]);
