//! Prompt templates sent to Gemini. Both are written in Brazilian
//! Portuguese, matching the language of the dashboard.

/// Instructions for extracting physical traits from an image. The model is
/// told to answer with a bare JSON object using the keys of
/// [`ExtractedDna`](crate::dna::ExtractedDna).
pub const DNA_EXTRACTION_PROMPT: &str = "\
Você é um especialista em análise de características físicas para criação de perfis de artistas.

Analise a imagem fornecida e extraia as seguintes características da pessoa:

1. **Formato do Rosto**: Oval, Redondo, Quadrado, Triangular, Diamante, etc.
2. **Tom de Pele**: Claro, Médio, Escuro, com descrição detalhada
3. **Cor dos Olhos**: Castanhos, Azuis, Verdes, Âmbar, etc.
4. **Formato das Sobrancelhas**: Arqueadas, Retas, Finas, Grossas, etc.
5. **Formato do Nariz**: Fino, Largo, Arrebitado, Aquilino, etc.
6. **Lábios**: Finos, Carnudos, Médios, com descrição
7. **Cabelo**: Cor, textura (liso, ondulado, cacheado, crespo), comprimento, estilo
8. **Tipo de Corpo**: Magro, Atlético, Curvilíneo, Plus Size, etc. (se visível)
9. **Tatuagens**: Descreva qualquer tatuagem visível, localização e estilo
10. **Gênero Aparente**: Masculino, Feminino, Não-binário (baseado na aparência)
11. **Idade Aparente**: Estimativa em anos

Retorne APENAS um objeto JSON válido com estas chaves (use nomes em camelCase): \
formatoRosto, tomPele, corOlhos, formatoSobrancelhas, formatoNariz, labios, cabelo, \
tipoCorpo, tatuagens, genero, idade.

Importante: Seja descritivo mas conciso. Se algo não for visível na imagem, omita a chave correspondente.";

/// Build the lore prompt for a short artist concept.
pub fn lore_prompt(concept: &str) -> String {
    format!(
        "Você é um escritor criativo especializado em criar histórias de fundo (LORE) ricas e \
envolventes para artistas.

Baseado no conceito: \"{concept}\"

Crie uma história de fundo completa e detalhada para este artista. A história deve incluir:

1. **Origem**: De onde o artista veio, sua infância e formação
2. **Jornada**: Como chegou até onde está hoje, os desafios enfrentados
3. **Motivações**: O que o move, seus sonhos e objetivos
4. **Personalidade**: Traços marcantes, peculiaridades, valores
5. **Estilo**: Como desenvolveu seu estilo único
6. **Marcos**: Momentos importantes que moldaram quem ele é

Escreva em português brasileiro, em um estilo narrativo envolvente, com aproximadamente \
300-500 palavras."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lore_prompt_quotes_the_concept() {
        let prompt = lore_prompt("cyberpunk DJ from São Paulo");
        assert!(prompt.contains("\"cyberpunk DJ from São Paulo\""));
    }

    #[test]
    fn dna_prompt_lists_every_key() {
        for key in ["formatoRosto", "tomPele", "corOlhos", "tatuagens", "idade"] {
            assert!(DNA_EXTRACTION_PROMPT.contains(key), "missing {key}");
        }
    }
}
