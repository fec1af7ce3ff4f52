//! Embedded drug monographs (bulário estático).
//!
//! Curated from the package inserts of the pharmacy's highest-volume
//! products. This table is the fallback source when the language model
//! refuses or fails to answer a medication question, so the wording is
//! deliberately conservative and always points back to a professional.

/// One drug monograph. All fields are pt-BR prose as shown to users.
pub struct Monograph {
    pub name: &'static str,
    pub active_ingredients: &'static [&'static str],
    pub class: &'static str,
    pub mechanism: &'static str,
    pub indications: &'static str,
    pub dosing: &'static str,
    pub contraindications: &'static str,
    pub adverse_effects: &'static str,
    pub warnings: &'static str,
    pub interactions: &'static str,
}

pub const CATALOG: &[Monograph] = &[
    Monograph {
        name: "Losartana",
        active_ingredients: &["Losartana Potássica"],
        class: "Antagonista do Receptor da Angiotensina II (ARA-II)",
        mechanism: "Bloqueia seletivamente os receptores AT1 da angiotensina II, impedindo a \
            vasoconstrição e a liberação de aldosterona, o que resulta em vasodilatação, redução \
            da pressão arterial e menor retenção de sódio e água.",
        indications: "Hipertensão arterial, incluindo casos com hipertrofia ventricular esquerda; \
            insuficiência cardíaca, especialmente em pacientes intolerantes a inibidores da ECA; \
            proteção renal em pacientes com diabetes tipo 2 e proteinúria.",
        dosing: "Adultos: a dose inicial usual para hipertensão é de 50 mg, uma vez ao dia. Para \
            insuficiência cardíaca, a dose inicial é de 12,5 mg, uma vez ao dia. A dose pode ser \
            ajustada pelo médico, geralmente até 100 mg/dia. Pode ser administrada com ou sem \
            alimentos.",
        contraindications: "Hipersensibilidade à losartana; gravidez, especialmente no segundo e \
            terceiro trimestres; lactação; uso concomitante com alisquireno em pacientes com \
            diabetes ou insuficiência renal moderada a grave.",
        adverse_effects: "Tontura, cefaleia e fadiga são os mais comuns. Podem ocorrer \
            hipercalemia, hipotensão ortostática, dor abdominal e diarreia. Reações raras e \
            graves incluem angioedema e alterações da função renal.",
        warnings: "Monitorar a função renal e o potássio sérico, especialmente em uso de \
            diuréticos poupadores de potássio. Descontinuar imediatamente se a gravidez for \
            detectada. Cautela em estenose da artéria renal e em pacientes com depleção de \
            volume.",
        interactions: "Diuréticos poupadores de potássio, suplementos de potássio, AINEs (podem \
            reduzir o efeito anti-hipertensivo e aumentar o risco de disfunção renal) e lítio \
            (aumento dos níveis séricos).",
    },
    Monograph {
        name: "Sinvastatina",
        active_ingredients: &["Sinvastatina"],
        class: "Inibidor da HMG-CoA Redutase (Estatina)",
        mechanism: "Inibe competitivamente a HMG-CoA redutase, enzima limitante da biossíntese \
            hepática do colesterol, aumentando a captação de LDL pelo fígado e reduzindo os \
            níveis de colesterol total, LDL-C e triglicerídeos.",
        indications: "Hipercolesterolemia primária e dislipidemia mista; prevenção de eventos \
            cardiovasculares (infarto do miocárdio, AVC, necessidade de revascularização) em \
            pacientes de alto risco, como portadores de doença arterial coronariana ou diabetes.",
        dosing: "Adultos: de 10 mg a 40 mg, uma vez ao dia, preferencialmente à noite, período em \
            que a biossíntese do colesterol é mais ativa. Ajustes a intervalos de 4 semanas ou \
            mais. Dose máxima recomendada de 40 mg/dia para a maioria dos pacientes.",
        contraindications: "Hipersensibilidade; doença hepática ativa ou elevações persistentes \
            das transaminases; gravidez e lactação; uso concomitante de inibidores potentes da \
            CYP3A4 (antifúngicos azólicos, antibióticos macrolídeos, inibidores da protease do \
            HIV) ou gemfibrozila.",
        adverse_effects: "Mialgia, dor abdominal, constipação e cefaleia são os mais comuns. \
            Efeitos raros e graves incluem miopatia, rabdomiólise e disfunção hepática. Qualquer \
            dor muscular inexplicável deve ser relatada ao médico.",
        warnings: "Monitorar a função hepática antes e durante o tratamento. Evitar o consumo \
            excessivo de álcool e de sumo de toranja, que eleva os níveis plasmáticos da \
            sinvastatina. Cautela com amiodarona, verapamil, diltiazem e anlodipino.",
        interactions: "Inibidores potentes da CYP3A4 (antifúngicos azólicos, antibióticos \
            macrolídeos, inibidores da protease do HIV, nefazodona, gemfibrozila), amiodarona, \
            verapamil, diltiazem e anlodipino.",
    },
    Monograph {
        name: "Diclofenaco",
        active_ingredients: &["Diclofenaco Sódico", "Diclofenaco Potássico"],
        class: "Anti-inflamatório Não Esteroidal (AINE)",
        mechanism: "Inibe as enzimas ciclooxigenase-1 (COX-1) e ciclooxigenase-2 (COX-2), \
            reduzindo a biossíntese de prostaglandinas mediadoras da inflamação, dor e febre. O \
            sal potássico tem início de ação mais rápido, sendo preferível para dor aguda.",
        indications: "Dores agudas e crônicas (pós-operatória, de dente, cólica menstrual, dor \
            lombar), inflamação em artrite reumatoide, osteoartrite, espondilite anquilosante e \
            gota aguda, e controle da febre em indicações específicas.",
        dosing: "Adultos: de 50 mg a 150 mg por dia, divididos em 2 ou 3 doses, conforme a \
            formulação. Usar a menor dose eficaz pelo menor tempo possível. Para dor aguda, o \
            diclofenaco potássico pode ser administrado em doses de 25-50 mg a cada 6-8 horas.",
        contraindications: "Hipersensibilidade ao diclofenaco ou a outros AINEs; úlcera péptica \
            ativa ou histórico de sangramento/perfuração gastrointestinal; insuficiência \
            cardíaca, hepática ou renal grave; terceiro trimestre de gravidez; asma ou urticária \
            precipitadas por AINEs.",
        adverse_effects: "Distúrbios gastrointestinais (dor epigástrica, náuseas, dispepsia) são \
            os mais comuns. Efeitos graves incluem úlcera, sangramento ou perfuração \
            gastrointestinal, eventos trombóticos cardiovasculares, insuficiência renal aguda e \
            reações cutâneas graves.",
        warnings: "Risco de eventos gastrointestinais, cardiovasculares e renais graves, \
            sobretudo em idosos. Monitorar as funções renal e hepática em tratamentos \
            prolongados. Utilizar sempre a menor dose e a menor duração possíveis.",
        interactions: "O uso concomitante com outros AINEs, anticoagulantes (varfarina), \
            antiagregantes plaquetários (aspirina, clopidogrel) ou corticosteroides aumenta o \
            risco de sangramento. Pode reduzir o efeito de diuréticos e anti-hipertensivos.",
    },
    Monograph {
        name: "Nimesulida",
        active_ingredients: &["Nimesulida"],
        class: "Anti-inflamatório Não Esteroidal (AINE) com inibição preferencial da COX-2",
        mechanism: "Inibe preferencialmente a ciclooxigenase-2 (COX-2), responsável pelas \
            prostaglandinas mediadoras da inflamação, dor e febre, com menor afinidade pela \
            COX-1 do que os AINEs não seletivos.",
        indications: "Dores agudas (dor de garganta, dor de dente, dores pós-operatórias, \
            dismenorreia primária), inflamação associada a condições como osteoartrite e febre, \
            quando é necessário um efeito anti-inflamatório rápido.",
        dosing: "Adultos: 100 mg, duas vezes ao dia, após as refeições. A duração do tratamento \
            deve ser a mais curta possível e não deve exceder 15 dias, devido ao risco de \
            hepatotoxicidade.",
        contraindications: "Hipersensibilidade à nimesulida ou a outros AINEs; úlcera péptica \
            ativa; histórico de reação hepatotóxica à nimesulida; insuficiência hepática; \
            insuficiência renal ou cardíaca grave; terceiro trimestre de gravidez e lactação; \
            crianças menores de 12 anos.",
        adverse_effects: "Dor epigástrica, náuseas, diarreia, rash cutâneo e prurido. O efeito \
            mais grave é a hepatotoxicidade, que varia de elevações assintomáticas de enzimas \
            hepáticas a casos raros de insuficiência hepática aguda, por vezes fatal.",
        warnings: "Usar sob estrita vigilância médica e nunca por mais de 15 dias. Descontinuar \
            imediatamente diante de sintomas de disfunção hepática (icterícia, urina escura, \
            fadiga persistente). Evitar associação com outros medicamentos hepatotóxicos e com \
            álcool.",
        interactions: "Evitar o uso concomitante com outros AINEs ou medicamentos hepatotóxicos.",
    },
    Monograph {
        name: "Omeprazol",
        active_ingredients: &["Omeprazol"],
        class: "Inibidor da Bomba de Prótons (IBP)",
        mechanism: "Inibe de forma irreversível a H+/K+-ATPase (bomba de prótons) das células \
            parietais do estômago, bloqueando a etapa final da secreção de ácido gástrico \
            independentemente do estímulo.",
        indications: "Doença do refluxo gastroesofágico (DRGE); cicatrização e prevenção de \
            úlceras gástricas e duodenais, incluindo as associadas a AINEs; erradicação do \
            Helicobacter pylori em combinação com antibióticos; síndrome de Zollinger-Ellison.",
        dosing: "Adultos: de 20 mg a 40 mg, uma vez ao dia, geralmente pela manhã, antes da \
            primeira refeição. Para erradicação de H. pylori, 20 mg duas vezes ao dia com \
            antibióticos, por 7 a 14 dias. Úlceras e DRGE tratam-se por 4 a 8 semanas.",
        contraindications: "Hipersensibilidade ao omeprazol ou a outros benzimidazóis \
            substituídos; uso concomitante com nelfinavir, cuja concentração plasmática pode ser \
            significativamente reduzida.",
        adverse_effects: "Cefaleia, dor abdominal, diarreia, náuseas e flatulência, geralmente \
            leves e transitórios. O uso prolongado associa-se a risco aumentado de fraturas \
            ósseas, deficiência de vitamina B12, hipomagnesemia e infecções por Clostridium \
            difficile.",
        warnings: "Excluir malignidade gástrica antes de iniciar o tratamento, pois os sintomas \
            podem ser mascarados. Uso por mais de um ano requer monitoramento médico regular. A \
            interrupção em DRGE crônica pode provocar rebote ácido.",
        interactions: "Clopidogrel (redução da eficácia antiplaquetária), varfarina (potencial \
            aumento do INR), metotrexato (aumento dos níveis séricos) e medicamentos cuja \
            absorção depende do pH gástrico (cetoconazol, digoxina).",
    },
    Monograph {
        name: "Pantoprazol",
        active_ingredients: &["Pantoprazol Sódico Sesqui-hidratado"],
        class: "Inibidor da Bomba de Prótons (IBP)",
        mechanism: "Liga-se covalentemente à H+/K+-ATPase das células parietais gástricas, \
            inibindo de forma seletiva e irreversível a secreção de ácido clorídrico, com ação \
            prolongada e independente do estímulo.",
        indications: "DRGE, incluindo esofagite de refluxo erosiva; cicatrização e prevenção de \
            úlceras gástricas e duodenais, incluindo as induzidas por AINEs; erradicação do \
            Helicobacter pylori em combinação com antibióticos; síndrome de Zollinger-Ellison.",
        dosing: "Adultos: de 20 mg a 40 mg, uma vez ao dia, preferencialmente pela manhã, antes \
            da primeira refeição. Para erradicação de H. pylori, 40 mg duas vezes ao dia com \
            antibióticos, por 7 a 14 dias.",
        contraindications: "Hipersensibilidade ao pantoprazol ou a outros benzimidazóis \
            substituídos; uso concomitante com nelfinavir.",
        adverse_effects: "Cefaleia, dor abdominal superior, diarreia, constipação e flatulência, \
            geralmente leves. O uso prolongado associa-se a risco de fraturas ósseas, deficiência \
            de vitamina B12 e hipomagnesemia.",
        warnings: "Excluir malignidade gástrica antes de iniciar o tratamento. Uso por mais de um \
            ano requer monitoramento regular. Tem menos interações mediadas pelo CYP2C19 do que \
            omeprazol e esomeprazol, o que pode ser vantajoso em pacientes que usam clopidogrel.",
        interactions: "Menos interações clinicamente significativas mediadas pelo CYP2C19 em \
            comparação com omeprazol e esomeprazol. Cautela com medicamentos cuja absorção \
            depende do pH gástrico e com metotrexato.",
    },
    Monograph {
        name: "Esomeprazol",
        active_ingredients: &["Esomeprazol Magnésico", "Esomeprazol Sódico"],
        class: "Inibidor da Bomba de Prótons (IBP)",
        mechanism: "S-enantiômero do omeprazol, inibe de forma seletiva e irreversível a \
            H+/K+-ATPase das células parietais do estômago. Sua maior biodisponibilidade resulta \
            em inibição ácida mais potente e prolongada que a do omeprazol.",
        indications: "DRGE, incluindo cicatrização e manutenção de esofagite erosiva; \
            cicatrização e prevenção de úlceras gástricas e duodenais, incluindo as associadas a \
            AINEs; erradicação do Helicobacter pylori; síndrome de Zollinger-Ellison.",
        dosing: "Adultos: de 20 mg a 40 mg, uma vez ao dia, pela manhã, pelo menos uma hora antes \
            da refeição. Para erradicação de H. pylori, 20 mg ou 40 mg duas vezes ao dia com \
            antibióticos, por 7 a 14 dias.",
        contraindications: "Hipersensibilidade ao esomeprazol ou a outros benzimidazóis \
            substituídos; uso concomitante com nelfinavir.",
        adverse_effects: "Cefaleia, dor abdominal, diarreia, náuseas e flatulência, geralmente \
            leves. O uso prolongado associa-se a risco de fraturas ósseas, deficiência de \
            vitamina B12, hipomagnesemia e infecções por Clostridium difficile.",
        warnings: "Excluir malignidade gástrica antes de iniciar o tratamento. Uso por mais de um \
            ano requer monitoramento regular. A interrupção em DRGE crônica pode provocar rebote \
            ácido. Pode reduzir a eficácia antiplaquetária do clopidogrel.",
        interactions: "Clopidogrel (redução da eficácia antiplaquetária), varfarina (potencial \
            aumento do INR), metotrexato (aumento dos níveis séricos) e medicamentos cuja \
            absorção depende do pH gástrico.",
    },
];
