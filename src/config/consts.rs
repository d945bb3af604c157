// src/config/consts.rs

// Board statuses, in display order. Unknown columns sort after these.
pub const STATUS_ORDER: &[&str] = &[
    "Novo",
    "Aberto",
    "Em progresso",
    "Pendente",
    "Escalonado Engenharia",
    "Resolvido",
    "Fechado",
];
pub const ESCALATED_STATUS: &str = "Escalonado Engenharia";

// Sentinels
pub const UNASSIGNED: &str = "Não Atribuído";
pub const CLIENT_NOT_INFORMED: &str = "Não Informado";
pub const NO_LINK: &str = "#";

// Card field labels as they appear on the board
pub const LABEL_CLIENT: &str = "Cliente";
pub const LABEL_CREATED: &str = "Created Date";
pub const LABEL_TEAM: &str = "Equipe Responsável";
pub const LABEL_ESCALATION: &str = "Inicio pend";
pub const LABEL_EFFORT: &str = "Esforço Esti";

// Work item links are rebuilt from the numeric id at the end of the card href
pub const DEFAULT_LINK_BASE: &str = "https://dev.azure.com/robbu/Suporte/_workitems/edit/";

// Table / export headers, same order as the copy columns
pub const CARD_HEADERS: &[&str] = &[
    "ID",
    "Título",
    "Cliente",
    "Status N2",
    "Data/hora de Criação",
    "Equipe responsável",
    "Data/hora de escalonamento",
];
pub const COUNT_HEADER: &str = "Quantidade";

// Local cache
pub const STORE_DIR: &str = ".store";
pub const STORE_SEP: char = ',';
pub const LOG_FILE: &str = "debug.log";
pub const FILTERS_FILE: &str = "last_filters.csv";
pub const CARDS_FILE: &str = "last_cards.csv";
pub const TAG_SEP: char = ';';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "cards";

// Opening more cards than this at once asks first
pub const OPEN_CONFIRM_THRESHOLD: usize = 10;
