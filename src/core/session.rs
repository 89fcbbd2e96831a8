use crate::config::Limits;
use crate::core::input::{confirm, read_bounded_integer, read_nonempty_text};
use crate::core::store::PatientStore;
use crate::core::table::format_table;
use crate::domain::model::{Patient, Registration};
use crate::domain::ports::Prompter;
use crate::utils::error::{RegistryError, Result};

pub const MENU: [&str; 6] = [
    "=== Cadastro de Pacientes ===",
    "1 - Cadastrar paciente",
    "2 - Estatísticas",
    "3 - Buscar por nome",
    "4 - Listar pacientes",
    "5 - Sair",
];
pub const MENU_PROMPT: &str = "Escolha uma opção: ";
pub const FAREWELL: &str = "Até logo!";
pub const NO_DATA: &str = "Sem dados: nenhum paciente cadastrado.";
pub const NO_MATCHES: &str = "Nenhum paciente encontrado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Register,
    Statistics,
    Search,
    List,
    Exit,
}

impl TryFrom<i64> for MenuOption {
    type Error = RegistryError;

    fn try_from(value: i64) -> Result<Self> {
        match value {
            1 => Ok(MenuOption::Register),
            2 => Ok(MenuOption::Statistics),
            3 => Ok(MenuOption::Search),
            4 => Ok(MenuOption::List),
            5 => Ok(MenuOption::Exit),
            other => Err(RegistryError::ValidationError {
                field: "menu".to_string(),
                message: format!("Unknown menu option {}", other),
            }),
        }
    }
}

/// One interactive run: owns the store for its whole lifetime.
pub struct Session<P: Prompter> {
    prompter: P,
    store: PatientStore,
    limits: Limits,
}

impl<P: Prompter> Session<P> {
    pub fn new(prompter: P, limits: Limits) -> Self {
        Self {
            prompter,
            store: PatientStore::new(),
            limits,
        }
    }

    pub fn store(&self) -> &PatientStore {
        &self.store
    }

    pub fn into_parts(self) -> (P, PatientStore) {
        (self.prompter, self.store)
    }

    /// Runs the menu until the exit option is chosen. A closed input stream
    /// ends the session the same way.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("Session started");
        match self.menu_loop() {
            Err(RegistryError::InputClosed) => {
                tracing::info!("Input closed, ending session");
                self.prompter.say("")?;
                self.prompter.say(FAREWELL)?;
                Ok(())
            }
            other => other,
        }
    }

    fn menu_loop(&mut self) -> Result<()> {
        loop {
            self.prompter.say("")?;
            for line in MENU {
                self.prompter.say(line)?;
            }
            let choice = read_bounded_integer(&mut self.prompter, MENU_PROMPT, Some(1), Some(5))?;
            let option = MenuOption::try_from(choice)?;
            tracing::debug!("Menu option selected: {:?}", option);

            match option {
                MenuOption::Register => {
                    self.register_patient()?;
                }
                MenuOption::Statistics => self.show_statistics()?,
                MenuOption::Search => self.search_patients()?,
                MenuOption::List => self.list_patients()?,
                MenuOption::Exit => {
                    self.prompter.say(FAREWELL)?;
                    tracing::info!("Session finished with {} patients", self.store.len());
                    return Ok(());
                }
            }
        }
    }

    pub fn register_patient(&mut self) -> Result<Registration> {
        let name = read_nonempty_text(&mut self.prompter, "Nome: ", Some(self.limits.name_max_len))?;
        let age = read_bounded_integer(
            &mut self.prompter,
            "Idade: ",
            Some(self.limits.age_min),
            Some(self.limits.age_max),
        )?;
        let phone =
            read_nonempty_text(&mut self.prompter, "Telefone: ", Some(self.limits.phone_max_len))?;

        let age = u8::try_from(age).map_err(|_| RegistryError::ValidationError {
            field: "age".to_string(),
            message: format!("{} does not fit the stored age range", age),
        })?;
        let patient = Patient::new(name, age, phone);
        patient.check_against(&self.limits)?;

        let prompter = &mut self.prompter;
        let outcome = self.store.register(patient, |existing| {
            prompter.say(&format!(
                "Atenção: já existe um paciente com este nome e telefone ({}, {} anos).",
                existing.name, existing.age
            ))?;
            confirm(prompter, "Cadastrar mesmo assim? (s/N): ")
        })?;

        let message = match outcome {
            Registration::Added => "Paciente cadastrado com sucesso.",
            Registration::AddedDuplicate => "Paciente cadastrado (duplicidade confirmada).",
            Registration::Declined => "Cadastro cancelado.",
        };
        self.prompter.say(message)?;
        Ok(outcome)
    }

    pub fn show_statistics(&mut self) -> Result<()> {
        let Some(stats) = self.store.statistics() else {
            return self.prompter.say(NO_DATA);
        };

        let lines = [
            format!("Total de pacientes: {}", stats.count),
            format!("Idade média: {:.2}", stats.mean_age),
            format!("Mais jovem: {} ({} anos)", stats.youngest.name, stats.youngest.age),
            format!("Mais velho: {} ({} anos)", stats.oldest.name, stats.oldest.age),
        ];
        for line in &lines {
            self.prompter.say(line)?;
        }
        Ok(())
    }

    pub fn search_patients(&mut self) -> Result<()> {
        let term = read_nonempty_text(
            &mut self.prompter,
            "Buscar por nome: ",
            Some(self.limits.name_max_len),
        )?;
        let hits = self.store.search(&term);
        if hits.is_empty() {
            return self.prompter.say(NO_MATCHES);
        }

        self.prompter
            .say(&format!("{} paciente(s) encontrado(s):", hits.len()))?;
        for line in format_table(&hits) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }

    pub fn list_patients(&mut self) -> Result<()> {
        let all: Vec<&Patient> = self.store.patients().iter().collect();
        for line in format_table(&all) {
            self.prompter.say(&line)?;
        }
        Ok(())
    }
}
