//! Built-in Russian texts keyed by axe rule id.

/// Localised title for common rules.
pub fn title(rule_id: &str) -> Option<&'static str> {
    let title = match rule_id {
        "aria-hidden-focus" => "ARIA-скрытые элементы не должны получать фокус",
        "button-name" => "Кнопки должны иметь понятный текст",
        "color-contrast" => "Недостаточный контраст цвета",
        "image-alt" => "Изображения должны иметь альтернативный текст",
        "label" => "Элементы формы должны иметь метки",
        "link-name" => "Ссылки должны иметь понятный текст",
        "html-has-lang" => "HTML-элемент должен иметь атрибут lang",
        "valid-lang" => "Атрибут lang должен содержать корректное значение",
        "document-title" => "Документ должен иметь заголовок",
        "landmark-one-main" => "Страница должна содержать один главный landmark",
        "region" => "Контент должен быть в landmark-регионах",
        "page-has-heading-one" => "Страница должна содержать заголовок первого уровня",
        "bypass" => "Страница должна иметь возможность пропуска повторяющегося контента",
        "heading-order" => "Заголовки должны следовать в правильном порядке",
        "list" => "Списки должны содержать только элементы li",
        "listitem" => "Элементы списка должны быть внутри ul или ol",
        "definition-list" => "Списки определений должны быть правильно структурированы",
        "dlitem" => "Элементы списка определений должны быть внутри dl",
        "duplicate-id" => "ID элементов должны быть уникальными",
        "duplicate-id-active" => "ID активных элементов должны быть уникальными",
        "duplicate-id-aria" => "ID элементов в ARIA должны быть уникальными",
        "form-field-multiple-labels" => "Поля формы не должны иметь несколько меток",
        "frame-title" => "Фреймы должны иметь заголовок",
        "input-image-alt" => "Кнопки-изображения должны иметь альтернативный текст",
        "meta-refresh" => "Не используйте meta refresh",
        "meta-viewport" => "Meta viewport не должен запрещать масштабирование",
        "object-alt" => "Object-элементы должны иметь альтернативный текст",
        "role-img-alt" => "Элементы с role=img должны иметь альтернативный текст",
        "scrollable-region-focusable" => "Прокручиваемые области должны быть фокусируемыми",
        "select-name" => "Select-элементы должны иметь доступное имя",
        "server-side-image-map" => "Серверные карты изображений не рекомендуются",
        "svg-img-alt" => "SVG-элементы с role=img должны иметь альтернативный текст",
        "td-headers-attr" => {
            "Ячейки таблицы с атрибутом headers должны ссылаться на существующие ячейки"
        }
        "th-has-data-cells" => "Заголовки таблицы должны иметь связанные ячейки данных",
        "valid-aria-role" => "ARIA role должен быть корректным",
        "video-caption" => "Видео должно иметь субтитры",
        "aria-allowed-attr" => "ARIA-атрибуты должны быть разрешены для данной роли",
        "aria-required-attr" => "Обязательные ARIA-атрибуты должны присутствовать",
        "aria-valid-attr" => "ARIA-атрибуты должны быть корректными",
        "aria-valid-attr-value" => "Значения ARIA-атрибутов должны быть корректными",
        _ => return None,
    };
    Some(title)
}

pub fn description(rule_id: &str) -> Option<&'static str> {
    let description = match rule_id {
        "aria-hidden-focus" => {
            "Элементы со скрытым ARIA не должны получать фокус или содержать элементы с фокусом"
        }
        "button-name" => "Кнопки должны иметь понятный текст",
        "color-contrast" => "Текст должен иметь достаточный контраст с фоном",
        "image-alt" => "Изображения должны иметь альтернативный текст",
        "label" => "Поля форм должны иметь метки",
        "link-name" => "Ссылки должны иметь понятный текст",
        _ => return None,
    };
    Some(description)
}

pub fn fix(rule_id: &str) -> Option<&'static str> {
    let fix = match rule_id {
        "aria-hidden-focus" => {
            "Добавьте tabindex=\"-1\" к элементам с aria-hidden=\"true\" или удалите их из DOM."
        }
        "button-name" => {
            "Добавьте текст внутрь кнопки или используйте aria-label для описания действия."
        }
        "color-contrast" => {
            "Увеличьте контраст между текстом и фоном до соотношения минимум 4.5:1 для обычного текста."
        }
        "image-alt" => "Добавьте атрибут alt с описанием содержимого изображения.",
        "label" => "Добавьте элемент <label> с атрибутом for или оберните поле в <label>.",
        "link-name" => "Добавьте понятный текст в ссылку или используйте aria-label.",
        _ => return None,
    };
    Some(fix)
}

/// Remediation used when nothing more specific is available.
pub const GENERIC_FIX: &str =
    "Изучите документацию по ссылке для получения рекомендаций по исправлению.";
