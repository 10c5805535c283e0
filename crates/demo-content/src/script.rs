//! Built-in replay scripts for the XML-RPC demo.

use replay_core::{Category, LogEntry, Timeline};

use crate::assets::AssetRegistry;

pub mod messages {
    pub const DEMO_TITLE: &str = "🚀 INICIANDO DEMONSTRAÇÃO COMPLETA DO SISTEMA";
    pub const CREATING_STRUCTURE: &str = "📁 Criando estrutura de arquivos...";
    pub const ALL_FILES_CREATED: &str = "✅ Todos os arquivos criados com sucesso!";
    pub const READY_TO_RUN: &str = "💡 Agora você pode executar a demonstração completa.";
    pub const TERMINAL_CLEARED: &str = "Terminal limpo. Pronto para nova execução.";
    pub const FILES_SAVED: &str = "📥 Todos os arquivos baixados com sucesso!";

    /// The file whose contents are echoed into the log when files are created.
    pub const PREVIEWED_FILE: &str = "requirements.txt";
}

/// Delay between announcing a file and reporting it created.
pub const FILE_CREATION_DELAY_MS: u64 = 500;

const DEMO_STEPS: &[(u64, &str, Category)] = &[
    (1000, "Criando ambiente virtual...", Category::Info),
    (2000, "✅ Ambiente virtual criado: venv/", Category::Success),
    (1000, "Instalando dependências...", Category::Info),
    (1500, "✅ Dependências instaladas com sucesso", Category::Success),
    (1000, "Iniciando servidor RPC na porta 8000...", Category::Info),
    (2000, "🟦 [14:30:15] [Servidor] Servidor RPC inicializado", Category::Server),
    (500, "🟦 [14:30:15] [Servidor] Iniciando servidor na porta 8000...", Category::Server),
    (1000, "🟦 [14:30:16] [Servidor] ✅ Servidor pronto! Registrados 3 métodos:", Category::Server),
    (500, "🟦 [14:30:16] [Servidor] Aguardando conexões...", Category::Server),
    (1000, "Executando cliente RPC...", Category::Info),
    (500, "🟩 [14:30:17] [Cliente] Cliente RPC inicializado", Category::Client),
    (500, "🟩 [14:30:17] [Cliente] Tentativa 1 de conexão...", Category::Client),
    (1000, "🟩 [14:30:18] [Cliente] ✅ Conectado com sucesso! Servidor: Servidor RPC Python", Category::Client),
    (500, "🟩 [14:30:18] [Cliente] Iniciando demonstração interativa...", Category::Client),
    (1000, "\\n🎮 MODO DEMONSTRAÇÃO INTERATIVA", Category::System),
    (500, "==================================================", Category::System),
    (1000, "\\n--- Teste 1/5 ---", Category::Info),
    (500, "🟩 [14:30:19] [Cliente] 📤 Enviando palavra para conversão: \"python\"", Category::Client),
    (1000, "🟦 [14:30:19] [Servidor] Recebendo requisição: \"python\"", Category::Server),
    (1000, "🟦 [14:30:20] [Servidor] Processamento concluído: \"PYTHON\"", Category::Server),
    (500, "🟩 [14:30:20] [Cliente] 📥 Resposta recebida: \"PYTHON\"", Category::Client),
    (500, "🟩 [14:30:20] [Cliente] ⏱️  Tempo de processamento: 1.02s", Category::Client),
    (500, "🔷 Entrada: python", Category::Input),
    (500, "🟢 Saída: PYTHON", Category::Output),
    (500, "✅ Sucesso!", Category::Success),
    (1000, "\\n--- Teste 2/5 ---", Category::Info),
    (500, "🟩 [14:30:21] [Cliente] 📤 Enviando palavra para conversão: \"sistemas distribuídos\"", Category::Client),
    (1000, "🟦 [14:30:21] [Servidor] Recebendo requisição: \"sistemas distribuídos\"", Category::Server),
    (1000, "🟦 [14:30:22] [Servidor] Processamento concluído: \"SISTEMAS DISTRIBUÍDOS\"", Category::Server),
    (500, "🟩 [14:30:22] [Cliente] 📥 Resposta recebida: \"SISTEMAS DISTRIBUÍDOS\"", Category::Client),
    (500, "🔷 Entrada: sistemas distribuídos", Category::Input),
    (500, "🟢 Saída: SISTEMAS DISTRIBUÍDOS", Category::Output),
    (500, "✅ Sucesso!", Category::Success),
    (2000, "\\n🎊 DEMONSTRAÇÃO CONCLUÍDA COM SUCESSO!", Category::Success),
    (500, "📚 O sistema demonstrou comunicação cliente-servidor via XML-RPC", Category::Info),
    (500, "com chamadas de procedimento remoto e processamento distribuído.", Category::Info),
];

/// Full demonstration run: a two-line header, then the scripted steps.
pub fn demo_timeline() -> Timeline {
    let header = [
        LogEntry::immediate(messages::DEMO_TITLE, Category::System),
        LogEntry::immediate("=".repeat(60), Category::System),
    ];
    header
        .into_iter()
        .chain(
            DEMO_STEPS
                .iter()
                .map(|(delay, message, category)| LogEntry::new(*delay, *message, *category)),
        )
        .collect()
}

/// Announces every file at once, then reports each one created after
/// [`FILE_CREATION_DELAY_MS`].
pub fn file_creation_timeline(registry: &AssetRegistry) -> Timeline {
    let mut timeline = Timeline::default();
    timeline.push(LogEntry::immediate(messages::CREATING_STRUCTURE, Category::System));
    for asset in registry.iter() {
        timeline.push(LogEntry::immediate(format!("📄 Criando {}...", asset.name), Category::Info));
    }
    timeline.push(LogEntry::immediate(messages::ALL_FILES_CREATED, Category::Success));
    timeline.push(LogEntry::immediate(messages::READY_TO_RUN, Category::Info));

    let mut delay = FILE_CREATION_DELAY_MS;
    for asset in registry.iter() {
        timeline.push(LogEntry::new(
            delay,
            format!("✅ {} criado com sucesso", asset.name),
            Category::Success,
        ));
        delay = 0;
        if asset.name == messages::PREVIEWED_FILE {
            timeline.push(LogEntry::immediate(
                format!("📋 Conteúdo do {}:", asset.name),
                Category::System,
            ));
            timeline.push(LogEntry::immediate(asset.contents.clone(), Category::Code));
        }
    }
    timeline
}
