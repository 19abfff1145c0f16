/// Dates are kept as ISO text and cast in SQL.
#[derive(Debug, Clone)]
pub struct SeedEstoqueItem {
    pub patrimonio: &'static str,
    pub categoria: &'static str,
    pub item: &'static str,
    pub descricao: &'static str,
    pub localizacao: &'static str,
    pub responsavel: &'static str,
    pub data_entrada: &'static str,
    pub status: &'static str,
    pub quantidade: i32,
    pub consumo: bool,
    pub imobilizado: bool,
    pub observacao: &'static str,
}

#[derive(Debug, Clone)]
pub struct SeedComodatoItem {
    pub categoria: &'static str,
    pub item: &'static str,
    pub descricao: &'static str,
    pub quantidade: i32,
    pub fornecedor: &'static str,
    pub data_locacao: Option<&'static str>,
    pub data_devolucao: Option<&'static str>,
    pub responsavel: &'static str,
    pub observacoes: &'static str,
}

#[derive(Debug, Clone)]
pub struct SeedMovimentacao {
    pub patrimonio: &'static str,
    pub categoria: &'static str,
    pub item: &'static str,
    pub descricao: &'static str,
    pub responsavel: &'static str,
    pub data_entrada: Option<&'static str>,
    pub data_saida: Option<&'static str>,
    /// Local time, `YYYY-MM-DD HH:MM`
    pub data_movimentacao: &'static str,
    pub localizacao: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub estoque: u64,
    pub comodato: u64,
    pub movimentacoes: u64,
}

impl SeedSummary {
    pub fn total(&self) -> u64 {
        self.estoque + self.comodato + self.movimentacoes
    }
}

pub fn sample_estoque() -> Vec<SeedEstoqueItem> {
    vec![
        SeedEstoqueItem {
            patrimonio: "NB001",
            categoria: "Notebook",
            item: "Dell Latitude 5420",
            descricao: "Notebook Dell i7 16GB RAM",
            localizacao: "TI - Sala 201",
            responsavel: "João Silva",
            data_entrada: "2024-01-15",
            status: "Disponível",
            quantidade: 15,
            consumo: false,
            imobilizado: true,
            observacao: "Em bom estado",
        },
        SeedEstoqueItem {
            patrimonio: "KB002",
            categoria: "Periférico",
            item: "Teclado Logitech",
            descricao: "Teclado sem fio",
            localizacao: "Almoxarifado",
            responsavel: "Maria Santos",
            data_entrada: "2024-02-01",
            status: "Disponível",
            quantidade: 3,
            consumo: true,
            imobilizado: false,
            observacao: "Baixo estoque",
        },
        SeedEstoqueItem {
            patrimonio: "MO003",
            categoria: "Monitor",
            item: "Monitor LG 24'",
            descricao: "Monitor Full HD",
            localizacao: "TI - Sala 203",
            responsavel: "Pedro Costa",
            data_entrada: "2024-01-20",
            status: "Em uso",
            quantidade: 8,
            consumo: false,
            imobilizado: true,
            observacao: "",
        },
    ]
}

pub fn sample_comodato() -> Vec<SeedComodatoItem> {
    vec![SeedComodatoItem {
        categoria: "Impressora",
        item: "Multifuncional HP LaserJet",
        descricao: "Impressora, scanner e copiadora",
        quantidade: 2,
        fornecedor: "HP Rental Services",
        data_locacao: Some("2024-01-01"),
        data_devolucao: Some("2024-12-31"),
        responsavel: "TI - João Silva",
        observacoes: "Contrato anual com manutenção inclusa",
    }]
}

pub fn sample_movimentacoes() -> Vec<SeedMovimentacao> {
    vec![
        SeedMovimentacao {
            patrimonio: "NB005",
            categoria: "Notebook",
            item: "Dell Inspiron 15",
            descricao: "Notebook Dell i5 8GB RAM",
            responsavel: "Carlos Oliveira",
            data_entrada: Some("2024-01-10"),
            data_saida: Some("2024-03-15"),
            data_movimentacao: "2024-03-15 14:30",
            localizacao: "Setor Financeiro",
            status: "Em uso",
        },
        SeedMovimentacao {
            patrimonio: "MO007",
            categoria: "Monitor",
            item: "Samsung 27'",
            descricao: "Monitor curvo",
            responsavel: "Ana Paula",
            data_entrada: Some("2023-12-05"),
            data_saida: Some("2024-03-10"),
            data_movimentacao: "2024-03-10 09:15",
            localizacao: "Setor RH",
            status: "Em uso",
        },
    ]
}
