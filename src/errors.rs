use thiserror::Error;

/// Erros possíveis durante o parsing de extratos bancários
#[derive(Error, Debug)]
pub enum StatementParseError {
    /// Falha genérica durante o parsing do conteúdo (detalhe na mensagem)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// Formato do arquivo não é suportado pela biblioteca
    #[error("Unsupported file format")]
    UnsupportedFormat,

    /// Erro ao ler o conteúdo do arquivo do disco
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// O builder foi chamado sem fornecer conteúdo nem caminho de arquivo
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Erros específicos de formatos ───────────────────────────────────────────

    /// Os bytes enviados não são um documento PDF legível
    #[error("Unreadable document: {0}")]
    DocumentFormat(String),

    /// Data no formato CSV inválida ou em formato não reconhecido
    #[error("Invalid CSV date format")]
    CsvDateInvalidFormat,
}

/// Erros de leitura/escrita do ledger persistido
#[derive(Error, Debug)]
pub enum StoreError {
    /// O arquivo persistido existe mas não é um documento JSON válido.
    /// O arquivo nunca é sobrescrito nesse caso.
    #[error("Store file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Erro de I/O ao ler ou gravar o arquivo do ledger
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Falhas possíveis de um upload completo (parse + persistência)
#[derive(Error, Debug)]
pub enum IngestError {
    #[error(transparent)]
    Parse(#[from] StatementParseError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Alias conveniente para Result com nosso tipo de erro principal
pub type StatementResult<T> = Result<T, StatementParseError>;
