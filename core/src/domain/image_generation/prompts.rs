use crate::domain::{common::language::Language, menu_analysis::value_objects::ChatPrompt};

/// Caption request for the given dish, phrased in the requested language.
pub fn caption_prompt(language: Language, dish: &str) -> ChatPrompt {
    let (system, user) = match language {
        Language::Chinese => (
            "你是一个专业的美食图片生成专家。请直接输出简洁的图片描述，不要包含任何对话、解释或markdown格式的内容。描述应该专注于视觉细节，以便AI生成精美的美食图片。".to_string(),
            format!(
                "生成一张{dish}的图片描述。要求：1. 专业的美食摄影构图 2. 精致的摆盘和装饰 3. 突出食材的质地和色泽 4. 适当的光影效果。请直接描述图片内容，不要加入任何其他文字。"
            ),
        ),
        Language::French => (
            "Vous êtes un expert en photographie culinaire. Fournissez uniquement une description visuelle directe, sans dialogue ni format markdown. Concentrez-vous sur les détails visuels pour la génération d'images.".to_string(),
            format!(
                "Description pour une photo de {dish}. Critères : 1. Composition photographique professionnelle 2. Présentation élégante 3. Textures et couleurs des ingrédients 4. Effets de lumière appropriés. Décrivez uniquement le contenu visuel."
            ),
        ),
        Language::Italian => (
            "Sei un esperto di fotografia culinaria. Fornisci solo una descrizione visiva diretta, senza dialoghi o formato markdown. Concentrati sui dettagli visivi per la generazione delle immagini.".to_string(),
            format!(
                "Descrizione per una foto di {dish}. Criteri: 1. Composizione fotografica professionale 2. Presentazione elegante 3. Texture e colori degli ingredienti 4. Effetti di luce appropriati. Descrivi solo il contenuto visivo."
            ),
        ),
        Language::English => (
            "You are a professional food photography expert. Provide direct visual descriptions without any dialogue or markdown formatting. Focus on visual details for AI image generation.".to_string(),
            format!(
                "Create a description for {dish}. Requirements: 1. Professional food photography composition 2. Elegant plating and garnishing 3. Highlight ingredient textures and colors 4. Appropriate lighting effects. Describe only the visual content."
            ),
        ),
    };

    ChatPrompt { system, user }
}
