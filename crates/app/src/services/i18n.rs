use super::Translator;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    PtBr,
    En,
}

impl Locale {
    /// Parse a locale tag, falling back to Portuguese.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "en" | "en-us" | "en-gb" => Locale::En,
            _ => Locale::PtBr,
        }
    }

    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::PtBr => PT_BR,
            Locale::En => EN,
        }
    }
}

const PT_BR: &[(&str, &str)] = &[
    ("contactModal.buttons.cancel", "Cancelar"),
    ("flowBuilder.ticketModal.title.create", "Adicionar uma fila ao fluxo"),
    ("flowBuilder.ticketModal.title.edit", "Editar fila"),
    ("flowBuilder.ticketModal.queuePrompt", "Escolha a fila que deseja transferir"),
    ("flowBuilder.ticketModal.queuePlaceholder", "Selecione uma Conexão"),
    ("flowBuilder.ticketModal.userPrompt", "Escolha um atendente"),
    ("flowBuilder.ticketModal.userPlaceholder", "Selecione um usuário"),
    ("flowBuilder.ticketModal.buttons.add", "Adicionar"),
    ("flowBuilder.ticketModal.buttons.edit", "Editar"),
    ("flowBuilder.ticketModal.errors.queueRequired", "Adicione uma fila"),
    ("flowBuilder.page.title", "Fluxo"),
    ("flowBuilder.page.addTicket", "Adicionar ticket"),
    ("flowBuilder.page.edit", "Editar"),
    ("flowBuilder.page.empty", "Nenhum ticket no fluxo."),
    ("flowBuilder.page.noUser", "Sem atendente"),
    ("flowBuilder.page.saved", "Fluxo atualizado"),
    ("errors.generic", "Ocorreu um erro, tente novamente."),
    ("backendErrors.ERR_NO_PERMISSION", "Você não tem permissão para acessar este recurso."),
    ("backendErrors.ERR_SESSION_EXPIRED", "Sessão expirada. Por favor entre."),
    ("backendErrors.ERR_INTERNAL_SERVER_ERROR", "Ocorreu um erro interno no servidor."),
];

const EN: &[(&str, &str)] = &[
    ("contactModal.buttons.cancel", "Cancel"),
    ("flowBuilder.ticketModal.title.create", "Add a queue to the flow"),
    ("flowBuilder.ticketModal.title.edit", "Edit queue"),
    ("flowBuilder.ticketModal.queuePrompt", "Choose the queue to transfer to"),
    ("flowBuilder.ticketModal.queuePlaceholder", "Select a queue"),
    ("flowBuilder.ticketModal.userPrompt", "Choose an agent"),
    ("flowBuilder.ticketModal.userPlaceholder", "Select a user"),
    ("flowBuilder.ticketModal.buttons.add", "Add"),
    ("flowBuilder.ticketModal.buttons.edit", "Save"),
    ("flowBuilder.ticketModal.errors.queueRequired", "Add a queue"),
    ("flowBuilder.page.title", "Flow"),
    ("flowBuilder.page.addTicket", "Add ticket"),
    ("flowBuilder.page.edit", "Edit"),
    ("flowBuilder.page.empty", "No tickets in this flow."),
    ("flowBuilder.page.noUser", "No agent"),
    ("flowBuilder.page.saved", "Flow updated"),
    ("errors.generic", "Something went wrong, please try again."),
    ("backendErrors.ERR_NO_PERMISSION", "You don't have permission to access this resource."),
    ("backendErrors.ERR_SESSION_EXPIRED", "Session expired. Please log in."),
    ("backendErrors.ERR_INTERNAL_SERVER_ERROR", "An internal server error occurred."),
];

/// Static translation tables. Missing keys fall back to Portuguese, then
/// to the key itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }
}

fn find(table: &[(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

impl Translator for Catalog {
    fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| {
            tracing::debug!(key, "Missing translation");
            key.to_string()
        })
    }

    fn lookup(&self, key: &str) -> Option<String> {
        find(self.locale.table(), key)
            .or_else(|| find(PT_BR, key))
            .map(str::to_string)
    }
}
