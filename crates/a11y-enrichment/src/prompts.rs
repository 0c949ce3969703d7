//! Instruction and prompt text sent to the text generator.
//!
//! All output is requested in Russian and as plain text: the report renders
//! it verbatim, so any markup would show up as stray characters.

use a11y_core::constants::SOLUTION_DELIMITER;
use a11y_core::models::Finding;

/// Role instruction for per-finding explanations.
pub fn explainer_system_prompt() -> String {
    format!(
        "Ты эксперт по веб-доступности. Ты переводишь технические описания проблем \
         доступности на русский язык и даёшь практические рекомендации по исправлению. \
         {PLAIN_TEXT_RULES}"
    )
}

/// Role instruction for the whole-report assessment.
pub fn assessor_system_prompt() -> String {
    format!(
        "Ты эксперт по веб-доступности и стандартам WCAG. Ты анализируешь отчёты о \
         доступности сайтов и даёшь комплексные практические рекомендации. \
         {PLAIN_TEXT_RULES}"
    )
}

const PLAIN_TEXT_RULES: &str = "Отвечай строго на русском языке и только чистым текстом. \
     Запрещена любая разметка: звёздочки (* или **), подчёркивания (_), обратные кавычки, \
     тильды (~), символы # для заголовков и HTML-теги. Для акцента используй ПРОПИСНЫЕ \
     БУКВЫ или метки в квадратных скобках, например [ВАЖНО].";

/// One line describing a finding inside a batch prompt.
pub fn finding_prompt(finding: &Finding) -> String {
    format!("Проблема: {} - {}", finding.id, finding.help)
}

/// User instruction for a batch: the prompts as a numbered list plus the reply format.
pub fn batch_user_prompt(prompts: &[String]) -> String {
    let mut prompt = format!(
        "Объясни следующие проблемы доступности веб-сайта ({count} шт.).\n\
         Формат ответа: пронумерованный список с той же нумерацией (1., 2., ...). \
         Для каждого пункта сначала краткое описание проблемы, затем отдельной строкой \
         \"{SOLUTION_DELIMITER} <текст>\".\n\
         Каждый пункт начинай так:\n\
         N. <описание>\n   {SOLUTION_DELIMITER} <текст>\n\n\
         Проблемы:",
        count = prompts.len(),
    );
    for (i, item) in prompts.iter().enumerate() {
        prompt.push_str(&format!("\n{}. {}", i + 1, item));
    }
    prompt
}

/// User instruction for a single ad hoc prompt.
pub fn translate_user_prompt(prompt: &str) -> String {
    format!(
        "Переведи и объясни проблему доступности. Отвечай кратко и сразу по делу.\n\n{prompt}"
    )
}

/// User instruction for the whole-report assessment.
pub fn summary_user_prompt(report_json: &str) -> String {
    format!(
        "Проанализируй отчёт о доступности веб-сайта и составь комплексное резюме.\n\n\
         Отчёт:\n{report_json}\n\n\
         Задачи:\n\
         1. Оценить общий уровень доступности сайта.\n\
         2. Выделить основные категории проблем.\n\
         3. Дать рекомендации по дальнейшему поддержанию доступности.\n\n\
         Используй простые списки с дефисами или нумерацией, заголовки пиши ПРОПИСНЫМИ \
         БУКВАМИ или метками вида [ПРИОРИТЕТ 1]."
    )
}
