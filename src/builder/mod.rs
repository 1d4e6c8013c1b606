use crate::common::{
    codec::{encode_with, select_version, EncodingPlan, Mode},
    error::{QRError, QRResult},
    metadata::{ECLevel, Version},
};

pub struct QRBuilder<'a> {
    data: &'a str,
    version: Option<Version>,
    mode: Option<Mode>,
    ec_level: ECLevel,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, version: None, mode: None, ec_level: ECLevel::M }
    }

    pub fn data(&mut self, data: &'a str) -> &mut Self {
        self.data = data;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn mode(&mut self, mode: Mode) -> &mut Self {
        self.mode = Some(mode);
        self
    }

    pub fn unset_mode(&mut self) -> &mut Self {
        self.mode = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn metadata(&self) -> String {
        let version = match self.version {
            Some(v) => v.number().to_string(),
            None => "None".to_string(),
        };
        let mode = match self.mode {
            Some(m) => format!("{m:?}"),
            None => "None".to_string(),
        };
        format!("{{ Version: {version}, Mode: {mode}, Ec level: {:?} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<EncodingPlan> {
        log::info!("Building data stream {}...", self.metadata());

        let mode = match self.mode {
            Some(m) => {
                if let Some(c) = self.data.chars().find(|c| !m.contains(*c)) {
                    return Err(QRError::InvalidChar(c));
                }
                m
            }
            None => Mode::select(self.data),
        };

        let version = match self.version {
            Some(v) => v,
            None => {
                log::debug!("Finding smallest version...");
                select_version(self.data.len(), mode, self.ec_level)?
            }
        };

        let plan = encode_with(self.data, mode, version, self.ec_level)?;
        log::info!(
            "Data stream built: mode {:?}, version {}, {} bits",
            plan.mode(),
            *plan.version(),
            plan.data().len()
        );
        Ok(plan)
    }
}
